//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Student documents.
    ///
    /// `document` holds the coerced fields (`name`, `age`); ordering uses
    /// `created_at` then `id`.
    students (id) {
        /// Primary key assigned by `gen_random_uuid()`.
        id -> Uuid,
        /// The student's fields as a JSON object.
        document -> Jsonb,
        /// Insertion timestamp.
        created_at -> Timestamptz,
    }
}
