//! Employee API handlers.
//!
//! ```text
//! GET    /employees/{id}
//! GET    /employees
//! POST   /employees/postEmp
//! PUT    /employees/{id}
//! PATCH  /employees/{id}
//! DELETE /employees/{id}
//! ```
//!
//! A missing id on patch or delete is reported with the same not-found
//! payload as a failed lookup.

use actix_web::{HttpResponse, delete, get, patch, post, put, web};

use crate::domain::{Employee, EmployeePatch, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ApiErrorSchema, EmployeeSchema};
use crate::inbound::http::state::HttpState;

fn missing(id: i64) -> Error {
    Error::not_found(format!("Employee with id {id} not found"))
}

/// Fetch one employee.
#[utoipa::path(
    get,
    path = "/employees/{id}",
    params(("id" = i64, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee", body = EmployeeSchema),
        (status = 404, description = "No employee with this id", body = ApiErrorSchema),
        (status = 500, description = "Internal server error", body = ApiErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "getEmployeeById"
)]
#[get("/employees/{id}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<web::Json<Employee>> {
    let employee = state.employees.get_employee(id.into_inner()).await?;
    Ok(web::Json(employee))
}

/// List every employee.
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees", body = [EmployeeSchema]),
        (status = 500, description = "Internal server error", body = ApiErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "getAllEmployees"
)]
#[get("/employees")]
pub async fn list_employees(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Employee>>> {
    let employees = state.employees.list_employees().await?;
    Ok(web::Json(employees))
}

/// Validate and create an employee.
#[utoipa::path(
    post,
    path = "/employees/postEmp",
    request_body = EmployeeSchema,
    responses(
        (status = 201, description = "Created employee", body = EmployeeSchema),
        (status = 400, description = "Validation failed", body = ApiErrorSchema),
        (status = 500, description = "Internal server error", body = ApiErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/employees/postEmp")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<Employee>,
) -> ApiResult<HttpResponse> {
    let created = state.employees.create_employee(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Overwrite an employee, creating it when the id is unused.
///
/// The body is not validated and its own `id` is ignored.
#[utoipa::path(
    put,
    path = "/employees/{id}",
    params(("id" = i64, Path, description = "Employee identifier")),
    request_body = EmployeeSchema,
    responses(
        (status = 200, description = "Stored employee", body = EmployeeSchema),
        (status = 500, description = "Storage failure", body = ApiErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "updateEmployeeById"
)]
#[put("/employees/{id}")]
pub async fn replace_employee(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
    payload: web::Json<Employee>,
) -> ApiResult<web::Json<Employee>> {
    let replaced = state
        .employees
        .replace_employee(id.into_inner(), payload.into_inner())
        .await?;
    Ok(web::Json(replaced))
}

/// Apply sparse field overrides.
#[utoipa::path(
    patch,
    path = "/employees/{id}",
    params(("id" = i64, Path, description = "Employee identifier")),
    request_body(content = Object, description = "Field name to new value"),
    responses(
        (status = 200, description = "Patched employee", body = EmployeeSchema),
        (status = 404, description = "No employee with this id", body = ApiErrorSchema),
        (status = 500, description = "Unknown field or bad value", body = ApiErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "updatePartialEmployeeById"
)]
#[patch("/employees/{id}")]
pub async fn patch_employee(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
    payload: web::Json<EmployeePatch>,
) -> ApiResult<web::Json<Employee>> {
    let id = id.into_inner();
    state
        .employees
        .patch_employee(id, payload.into_inner())
        .await?
        .map(web::Json)
        .ok_or_else(|| missing(id))
}

/// Remove an employee; responds `true` when a row was removed.
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    params(("id" = i64, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee removed", body = bool),
        (status = 404, description = "No employee with this id", body = ApiErrorSchema),
        (status = 500, description = "Internal server error", body = ApiErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployeeById"
)]
#[delete("/employees/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<web::Json<bool>> {
    let id = id.into_inner();
    if state.employees.delete_employee(id).await? {
        Ok(web::Json(true))
    } else {
        Err(missing(id))
    }
}

/// Register every employee route.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use employee_service::inbound::http::employees;
///
/// let app = App::new().configure(employees::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_employee)
        .service(list_employees)
        .service(get_employee)
        .service(replace_employee)
        .service(patch_employee)
        .service(delete_employee);
}
