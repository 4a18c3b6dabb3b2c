//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while turning every
//! failure into the same JSON payload:
//! `{ "status", "message", "subErrors"?, "traceId"? }`.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, error, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

pub use crate::domain::ApiResult;

/// Error body returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Upper-snake reason phrase, e.g. `NOT_FOUND`.
    pub status: String,
    pub message: String,
    /// Present only for validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_errors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl ApiError {
    /// Build a payload for `status`.
    ///
    /// # Examples
    /// ```
    /// use actix_web::http::StatusCode;
    /// use employee_service::inbound::http::error::ApiError;
    ///
    /// let body = ApiError::new(StatusCode::BAD_REQUEST, "Input validation failed", None);
    /// assert_eq!(body.status, "BAD_REQUEST");
    /// ```
    pub fn new(
        status: StatusCode,
        message: impl Into<String>,
        sub_errors: Option<Vec<String>>,
    ) -> Self {
        Self {
            status: status_name(status),
            message: message.into(),
            sub_errors,
            trace_id: None,
        }
    }

    #[must_use]
    fn with_trace_id(mut self, trace_id: Option<&str>) -> Self {
        self.trace_id = trace_id.map(str::to_owned);
        self
    }
}

fn status_name(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map_or_else(|| status.as_str().to_owned(), |reason| {
            reason.to_uppercase().replace(' ', "_")
        })
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn payload_for(error: &Error) -> ApiError {
    let status = status_for(error.code());
    let body = match error.code() {
        ErrorCode::NotFound => ApiError::new(status, error.message().to_uppercase(), None),
        ErrorCode::ValidationFailed => {
            ApiError::new(status, error.message(), Some(error.sub_errors().to_vec()))
        }
        ErrorCode::InternalError => ApiError::new(status, error.message(), None),
    };
    body.with_trace_id(error.trace_id())
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        match self.code() {
            ErrorCode::InternalError => error!(message = self.message(), "request failed"),
            code => debug!(?code, message = self.message(), "request rejected"),
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(payload_for(self))
    }
}

/// Route JSON body extraction failures through the domain responder.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::internal(err.to_string()).into()
}

/// Route path extraction failures through the domain responder.
pub fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    Error::internal(err.to_string()).into()
}

/// Extractor configuration sharing [`json_error_handler`] and
/// [`path_error_handler`].
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler));
}
