//! Pooled async PostgreSQL connections for the employee store.
//!
//! Connections come from `diesel-async` managed by `bb8`, so queries never
//! block the actix workers. Pool failures surface as [`PoolError`] and are
//! turned into connection errors by the repository.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

/// Checkout wait used when none is configured.
pub const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);
/// Pool size used when none is configured.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Errors raised while building or using the pool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection became available in time.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// The pool could not be created.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

/// Settings for [`DbPool::new`].
///
/// ```
/// use std::time::Duration;
/// use employee_service::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://localhost/employees")
///     .with_max_size(4)
///     .with_connection_timeout(Duration::from_secs(5));
/// assert_eq!(config.max_size(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Configuration for `database_url` with default limits.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: DEFAULT_MAX_CONNECTIONS,
            connection_timeout: DEFAULT_CONNECTION_TIMEOUT,
        }
    }

    /// Cap the number of open connections. Zero is raised to one.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size.max(1);
        self
    }

    /// Bound how long a checkout may wait.
    #[must_use]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Target database.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Connection cap.
    pub fn max_size(&self) -> u32 {
        self.max_size
    }
}

/// Cloneable handle to the shared pool.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build the pool and open its first connection.
    ///
    /// # Errors
    ///
    /// [`PoolError::Build`] when the URL is invalid or the database refuses
    /// the initial connection.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.database_url);
        let inner = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::Build {
                message: err.to_string(),
            })?;
        Ok(Self { inner })
    }

    /// Check out a connection.
    ///
    /// # Errors
    ///
    /// [`PoolError::Checkout`] when the configured timeout elapses.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner.get().await.map_err(|err| PoolError::Checkout {
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_apply_until_overridden() {
        let config = PoolConfig::new("postgres://localhost/employees");

        assert_eq!(config.database_url(), "postgres://localhost/employees");
        assert_eq!(config.max_size(), DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.connection_timeout, DEFAULT_CONNECTION_TIMEOUT);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(25, 25)]
    fn max_size_is_at_least_one(#[case] requested: u32, #[case] expected: u32) {
        let config = PoolConfig::new("postgres://localhost/employees").with_max_size(requested);
        assert_eq!(config.max_size(), expected);
    }

    #[rstest]
    fn errors_carry_the_underlying_message() {
        let err = PoolError::Checkout {
            message: "timed out".into(),
        };
        assert_eq!(err.to_string(), "failed to get connection from pool: timed out");
    }
}
