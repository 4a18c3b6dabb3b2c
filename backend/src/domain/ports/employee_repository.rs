//! Port abstraction for employee persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::EmployeeRecord;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by employee repository adapters.
    pub enum EmployeePersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "{message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "{message}",
    }
}

impl EmployeePersistenceError {
    /// Adapter description of the failure.
    pub fn message(&self) -> &str {
        match self {
            Self::Connection { message } | Self::Query { message } => message,
        }
    }
}

/// Storage collaborator for employee records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<EmployeeRecord>, EmployeePersistenceError>;

    /// Every record, ordered by identifier.
    async fn find_all(&self) -> Result<Vec<EmployeeRecord>, EmployeePersistenceError>;

    /// Persist `record` and return it with its identifier populated.
    ///
    /// A record without an identifier is inserted. A record carrying one
    /// overwrites the row with that identifier, creating it when absent.
    async fn save(&self, record: EmployeeRecord)
    -> Result<EmployeeRecord, EmployeePersistenceError>;

    /// Whether a record with `id` exists.
    async fn exists_by_id(&self, id: i64) -> Result<bool, EmployeePersistenceError>;

    /// Remove the record with `id`. Removing an absent record is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), EmployeePersistenceError>;
}
