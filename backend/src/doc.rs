//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the employee endpoints, the health checks and the
//! schema wrappers from [`crate::inbound::http::schemas`]. Domain types stay
//! free of utoipa derives.
//!
//! The generated document is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::schemas::{ApiErrorSchema, EmployeeSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee service API",
        description = "CRUD over employee records, plus health checks."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::replace_employee,
        crate::inbound::http::employees::patch_employee,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(EmployeeSchema, ApiErrorSchema)),
    tags(
        (name = "employees", description = "Employee records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
