//! Backend entry-point: loads settings, selects storage and starts the server.

mod server;

use std::ffi::OsString;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use employee_service::inbound::http::health::HealthState;
use employee_service::outbound::persistence::{DbPool, PoolConfig};
use ortho_config::OrthoConfig;
use server::{ServerConfig, ServiceSettings, clear_liveness_when, create_server};

fn load_settings() -> std::io::Result<ServiceSettings> {
    ServiceSettings::load_from_iter(std::env::args_os().collect::<Vec<OsString>>())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))
}

async fn build_config(settings: &ServiceSettings) -> std::io::Result<ServerConfig> {
    let bind_addr = settings.bind_addr().map_err(|e| {
        std::io::Error::other(format!("invalid host {:?}: {e}", settings.host()))
    })?;
    let config = ServerConfig::new(bind_addr);

    let Some(database_url) = settings.database_url.as_deref() else {
        info!("no database configured; using in-memory employee store");
        return Ok(config);
    };
    let pool_config =
        PoolConfig::new(database_url).with_max_size(settings.db_max_connections());
    let pool = DbPool::new(pool_config)
        .await
        .map_err(|e| std::io::Error::other(format!("database pool: {e}")))?;
    info!(
        max_connections = settings.db_max_connections(),
        "using PostgreSQL employee store"
    );
    Ok(config.with_db_pool(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = load_settings()?;
    let config = build_config(&settings).await?;
    let bind_addr = config.bind_addr;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(clear_liveness_when(
        actix_web::rt::signal::ctrl_c(),
        health_state,
    ));
    info!(%bind_addr, "employee service listening");
    server.await
}
