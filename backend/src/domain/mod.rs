//! Domain primitives, errors and ports.
//!
//! Purpose: define the student aggregate, the coercion rules applied to
//! incoming payloads, and the transport-agnostic error type. Inbound and
//! outbound adapters depend on this module; it depends on neither.
//!
//! Public surface:
//! - Error (alias to `error::Error`): failure payload reported to clients.
//! - ErrorCode (alias to `error::ErrorCode`): stable failure category.
//! - Student, StudentId, Age, StudentDocument: the single resource type.
//! - TraceId: request-scoped correlation identifier.

pub mod error;
pub mod ports;
mod student;
mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::student::{
    AGE_FIELD, Age, AgeValidationError, NAME_FIELD, Student, StudentCoercionError,
    StudentDocument, StudentId, StudentIdValidationError,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
