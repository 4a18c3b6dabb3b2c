//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod employee_operations;
mod employee_repository;

#[cfg(test)]
pub use employee_operations::MockEmployeeOperations;
pub use employee_operations::EmployeeOperations;
#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
pub use employee_repository::{EmployeePersistenceError, EmployeeRepository};
