//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module; only the repository, the pool and its
//! configuration are exported.
//!
//! # Example
//!
//! ```no_run
//! use employee_service::outbound::persistence::{DbPool, DieselEmployeeRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), employee_service::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/employees")).await?;
//! let repository = DieselEmployeeRepository::new(pool);
//! # let _ = repository;
//! # Ok(())
//! # }
//! ```

mod diesel_employee_repository;
mod error_mapping;
mod models;
mod pool;
mod schema;

pub use diesel_employee_repository::DieselEmployeeRepository;
pub use pool::{DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_CONNECTIONS, DbPool, PoolConfig, PoolError};
