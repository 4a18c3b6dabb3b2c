//! OpenAPI schema definitions for domain and payload types.
//!
//! Domain types stay free of `ToSchema`; these wrappers mirror their wire
//! shape for utoipa and are never constructed.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Employee`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Employee)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmployeeSchema {
    /// Storage-assigned identifier; ignored on create.
    #[schema(example = 1)]
    id: Option<i64>,
    #[schema(example = "Ada Lovelace")]
    name: Option<String>,
    #[schema(example = "ada@example.com")]
    email: Option<String>,
    /// Between 18 and 80 inclusive.
    #[schema(example = 36)]
    age: Option<i64>,
    /// `ADMIN` or `USER`.
    #[schema(example = "ADMIN")]
    role: Option<String>,
    /// At most `999.99`, accepted range `0.01..=100.00`.
    #[schema(value_type = Option<f64>, example = 12.5)]
    salary_hike: Option<f64>,
    /// ISO-8601 date, not in the future.
    #[schema(value_type = Option<String>, format = Date, example = "2024-02-01")]
    date_of_joining: Option<String>,
    /// Must be `true` on create.
    #[schema(example = true)]
    is_active: Option<bool>,
}

/// OpenAPI schema for [`crate::inbound::http::error::ApiError`].
#[derive(ToSchema)]
#[schema(as = crate::inbound::http::error::ApiError)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ApiErrorSchema {
    /// Upper-snake HTTP reason phrase.
    #[schema(example = "BAD_REQUEST")]
    status: String,
    #[schema(example = "Input validation failed")]
    message: String,
    /// Individual violations; present only for validation failures.
    #[schema(example = json!(["Age must be between 18 and 80"]))]
    sub_errors: Option<Vec<String>>,
    /// Correlation identifier, echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}
