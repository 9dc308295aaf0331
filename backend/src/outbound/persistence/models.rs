//! Internal Diesel row structs for the students table.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::students;

/// Row struct for reading from the students table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = students)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct StudentRow {
    pub id: Uuid,
    pub document: serde_json::Value,
    #[expect(dead_code, reason = "ordering happens in SQL; the value is never read")]
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for new student documents. Identifier and timestamp
/// come from column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = students)]
pub(crate) struct NewStudentRow<'a> {
    pub document: &'a serde_json::Value,
}
