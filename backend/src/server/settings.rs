//! Service settings loaded via OrthoConfig.

use std::net::{AddrParseError, IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use employee_service::outbound::persistence::DEFAULT_MAX_CONNECTIONS;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Runtime settings taken from `EMPLOYEES_*` variables, config files and
/// command-line flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EMPLOYEES")]
pub struct ServiceSettings {
    /// IP address the listener binds to.
    pub host: Option<String>,
    /// TCP port the listener binds to.
    pub port: Option<u16>,
    /// PostgreSQL connection string; the in-memory store is used without one.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
}

impl ServiceSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    /// Socket address built from [`Self::host`] and [`Self::port`].
    ///
    /// # Errors
    /// Returns [`AddrParseError`] when the host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host().parse()?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}
