//! Domain-level error taxonomy.
//!
//! Operations report failures as one of exactly three kinds. The errors are
//! transport agnostic; the HTTP adapter decides status codes and payload
//! layout (see `inbound::http::error`).

use std::fmt;

use super::TraceId;

/// Failure category of a domain [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The addressed record does not exist.
    NotFound,
    /// A candidate record violated one or more validation rules.
    ValidationFailed,
    /// Any other failure, such as a storage fault or malformed input.
    InternalError,
}

/// Fixed message carried by every validation failure.
pub const VALIDATION_FAILED_MESSAGE: &str = "Input validation failed";

/// Domain error value.
///
/// ## Invariants
/// - `sub_errors` is non-empty only for [`ErrorCode::ValidationFailed`].
/// - `trace_id` is the request trace identifier in scope at construction.
///
/// # Examples
/// ```
/// use employee_service::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Employee with id 7 not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert!(err.sub_errors().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    sub_errors: Vec<String>,
    trace_id: Option<String>,
}

impl Error {
    fn new(code: ErrorCode, message: impl Into<String>, sub_errors: Vec<String>) -> Self {
        Self {
            code,
            message: message.into(),
            sub_errors,
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// A lookup found nothing for the requested identifier.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message, Vec::new())
    }

    /// A candidate record failed validation.
    ///
    /// The message is always [`VALIDATION_FAILED_MESSAGE`]; the individual
    /// violations travel as sub-errors in the order given.
    ///
    /// # Examples
    /// ```
    /// use employee_service::domain::Error;
    ///
    /// let err = Error::validation(["Name can't be null", "Active must be true"]);
    /// assert_eq!(err.message(), "Input validation failed");
    /// assert_eq!(err.sub_errors().len(), 2);
    /// ```
    pub fn validation<I, S>(violations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sub_errors = violations.into_iter().map(Into::into).collect();
        Self::new(ErrorCode::ValidationFailed, VALIDATION_FAILED_MESSAGE, sub_errors)
    }

    /// Catch-all for unexpected failures; the message is kept verbatim.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message, Vec::new())
    }

    /// Attach an explicit trace identifier, replacing any captured one.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Failure category.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable description.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Individual validation violations.
    pub fn sub_errors(&self) -> &[String] {
        self.sub_errors.as_slice()
    }

    /// Trace identifier captured at construction.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Error::not_found("missing"), ErrorCode::NotFound, "missing")]
    #[case(Error::internal("boom"), ErrorCode::InternalError, "boom")]
    #[case(
        Error::validation(["Name can't be null"]),
        ErrorCode::ValidationFailed,
        VALIDATION_FAILED_MESSAGE
    )]
    fn constructors_set_code_and_message(
        #[case] error: Error,
        #[case] code: ErrorCode,
        #[case] message: &str,
    ) {
        assert_eq!(error.code(), code);
        assert_eq!(error.message(), message);
    }

    #[test]
    fn validation_keeps_violation_order() {
        let err = Error::validation(vec!["b".to_owned(), "a".to_owned()]);
        assert_eq!(err.sub_errors(), ["b", "a"]);
    }

    #[test]
    fn internal_message_is_not_rewritten() {
        let err = Error::internal("Duplicate key value violates \"employees_pkey\"");
        assert_eq!(err.to_string(), "Duplicate key value violates \"employees_pkey\"");
    }

    #[tokio::test]
    async fn captures_trace_id_in_scope() {
        let trace_id = TraceId::generate();
        let err = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
        assert_eq!(err.trace_id(), Some(trace_id.to_string().as_str()));
    }

    #[test]
    fn trace_id_is_absent_out_of_scope() {
        assert!(Error::not_found("missing").trace_id().is_none());
    }
}
