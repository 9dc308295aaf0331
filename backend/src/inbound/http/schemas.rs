//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and register under the domain
//! names through utoipa's `as` attribute.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The body or identifier could not be coerced.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The document store could not be reached.
    #[schema(rename = "store_unavailable")]
    StoreUnavailable,
    /// Any other failure.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// Every failure is reported with status `500` and this body.
#[derive(ToSchema)]
#[schema(as = Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Raw text of the underlying fault.
    #[schema(example = "student validation failed: age: cast to number failed for value \"abc\" (type string)")]
    error: String,
    /// Stable machine-readable category.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Correlation identifier of the failed request.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Student`].
#[derive(ToSchema)]
#[schema(as = Student)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct StudentSchema {
    /// Store-assigned identifier.
    #[schema(rename = "_id", format = Uuid, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    /// Omitted when unset.
    #[schema(example = "Ada Lovelace")]
    name: Option<String>,
    /// Omitted when unset. Integral ages are rendered as integers.
    #[schema(example = 21)]
    age: Option<f64>,
}

/// Request body accepted by create and update.
///
/// Values are coerced: numbers and booleans become text for `name`, numeric
/// strings become numbers for `age`, `null` clears a field and unknown keys
/// are dropped.
#[derive(ToSchema)]
#[schema(as = StudentPayload)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct StudentPayloadSchema {
    /// Student name.
    #[schema(example = "Ada Lovelace")]
    name: Option<String>,
    /// Student age; numeric strings are accepted.
    #[schema(example = "21")]
    age: Option<String>,
}
