//! Domain-level error type.
//!
//! Every failure raised while serving a request ends up as an [`Error`].
//! The type is transport agnostic; the HTTP adapter decides how it is
//! rendered. The message always carries the underlying fault's text so
//! clients see what went wrong, whatever the category.

use serde::{Deserialize, Serialize};

use super::ports::StudentRepositoryError;
use super::{StudentCoercionError, StudentIdValidationError, TraceId};

/// Stable machine-readable category describing the failure.
///
/// Categories exist for logs and clients that want them; they do not change
/// the HTTP status, which is uniform for every failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request body or identifier could not be coerced.
    InvalidRequest,
    /// The document store could not be reached.
    StoreUnavailable,
    /// Any other failure raised while serving the request.
    InternalError,
}

/// Failure payload.
///
/// Serialises as `{"error": "...", "code": "...", "traceId": "..."}`; the
/// `error` key is the one browser clients read.
///
/// # Examples
/// ```
/// use student_records::domain::{Error, ErrorCode};
///
/// let err = Error::store_unavailable("connection refused");
/// assert_eq!(err.code(), ErrorCode::StoreUnavailable);
/// assert_eq!(err.message(), "connection refused");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    /// Raw text of the underlying fault.
    #[serde(rename = "error")]
    message: String,
    code: ErrorCode,
    /// Correlation identifier of the request that failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
}

impl Error {
    /// Create an error, capturing the trace identifier in scope (if any).
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code,
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::StoreUnavailable`].
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StoreUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Attach an explicit trace identifier.
    #[cfg(test)]
    pub(crate) fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Stable machine-readable category.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to clients.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Trace identifier of the failing request, when one was in scope.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

impl From<StudentRepositoryError> for Error {
    fn from(err: StudentRepositoryError) -> Self {
        match err {
            StudentRepositoryError::Connection { .. } => Self::store_unavailable(err.to_string()),
            StudentRepositoryError::Query { .. } => Self::internal(err.to_string()),
        }
    }
}

impl From<StudentCoercionError> for Error {
    fn from(err: StudentCoercionError) -> Self {
        Self::invalid_request(err.to_string())
    }
}

impl From<StudentIdValidationError> for Error {
    fn from(err: StudentIdValidationError) -> Self {
        Self::invalid_request(err.to_string())
    }
}
