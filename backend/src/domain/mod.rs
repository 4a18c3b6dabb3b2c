//! Domain types, rules and services.
//!
//! Purpose: Define the employee model, the rules a candidate must pass, and
//! the use-cases that compose them with a storage port. Nothing here knows
//! about HTTP or SQL.
//!
//! Public surface:
//! - `Error`: failure taxonomy shared by all layers.
//! - `Employee` / `EmployeeRecord`: transfer and storage shapes.
//! - `EmployeeService`: implementation of the `EmployeeOperations` port.

pub mod employee;
pub mod employee_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::employee::{
    Employee, EmployeePatch, EmployeeRecord, EmployeeRole, MAX_AGE, MIN_AGE, MappingError,
    PatchError, UnknownRole, Violation, apply_patch, decimal_from_float, validate_employee,
};
pub use self::employee_service::EmployeeService;
pub use self::error::{Error, ErrorCode, VALIDATION_FAILED_MESSAGE};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use employee_service::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("Employee with id 1 not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
