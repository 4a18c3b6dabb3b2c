//! Driving port for employee use-cases.
//!
//! Inbound adapters call this port and never touch persistence directly.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeePatch, Error};

/// Employee CRUD use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeOperations: Send + Sync {
    /// Fetch one employee; not-found when `id` is unknown.
    async fn get_employee(&self, id: i64) -> Result<Employee, Error>;

    /// Every employee in storage order.
    async fn list_employees(&self) -> Result<Vec<Employee>, Error>;

    /// Validate and insert a new employee.
    async fn create_employee(&self, candidate: Employee) -> Result<Employee, Error>;

    /// Write `candidate` under `id`, creating the row when absent.
    async fn replace_employee(&self, id: i64, candidate: Employee) -> Result<Employee, Error>;

    /// Apply sparse overrides. `Ok(None)` means no employee has `id`.
    async fn patch_employee(
        &self,
        id: i64,
        updates: EmployeePatch,
    ) -> Result<Option<Employee>, Error>;

    /// Remove an employee. `Ok(false)` means no employee had `id`.
    async fn delete_employee(&self, id: i64) -> Result<bool, Error>;
}
