//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and only see the driving
//! port, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::EmployeeOperations;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub employees: Arc<dyn EmployeeOperations>,
}

impl HttpState {
    /// Wrap the employee use-cases.
    pub fn new(employees: Arc<dyn EmployeeOperations>) -> Self {
        Self { employees }
    }
}
