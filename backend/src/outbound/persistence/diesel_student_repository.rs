//! PostgreSQL-backed `StudentRepository` implementation using Diesel ORM.
//!
//! Updates merge the patch into the stored document with the JSONB `||`
//! operator, so a partial payload only replaces the keys it carries and the
//! merge happens in a single statement.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{StudentRepository, StudentRepositoryError};
use crate::domain::{Student, StudentDocument, StudentId};

use super::models::{NewStudentRow, StudentRow};
use super::pool::{DbPool, PoolError};
use super::schema::students;

/// Diesel-backed implementation of the `StudentRepository` port.
#[derive(Clone)]
pub struct DieselStudentRepository {
    pool: DbPool,
}

impl DieselStudentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to repository connection errors.
fn map_pool_error(error: PoolError) -> StudentRepositoryError {
    StudentRepositoryError::connection(error.message())
}

/// Map Diesel errors to repository errors, keeping the server's message.
fn map_diesel_error(error: diesel::result::Error) -> StudentRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => StudentRepositoryError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            StudentRepositoryError::connection(info.message())
        }
        DieselError::DatabaseError(_, info) => StudentRepositoryError::query(info.message()),
        other => StudentRepositoryError::query(other.to_string()),
    }
}

fn row_to_student(row: StudentRow) -> Student {
    StudentDocument::from_stored(row.document).into_student(StudentId::from_uuid(row.id))
}

#[async_trait]
impl StudentRepository for DieselStudentRepository {
    async fn create(&self, document: &StudentDocument) -> Result<Student, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let value = document.to_value();
        let row = diesel::insert_into(students::table)
            .values(&NewStudentRow { document: &value })
            .returning(StudentRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_student(row))
    }

    async fn list(&self) -> Result<Vec<Student>, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<StudentRow> = students::table
            .select(StudentRow::as_select())
            .order((students::created_at.asc(), students::id.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_student).collect())
    }

    async fn update(
        &self,
        id: &StudentId,
        patch: &StudentDocument,
    ) -> Result<Option<Student>, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<StudentRow> =
            diesel::update(students::table.filter(students::id.eq(id.as_uuid())))
                .set(students::document.eq(students::document.concat(patch.to_value())))
                .returning(StudentRow::as_returning())
                .get_result(&mut conn)
                .await
                .optional()
                .map_err(map_diesel_error)?;

        Ok(row.map(row_to_student))
    }

    async fn delete(&self, id: &StudentId) -> Result<(), StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(students::table.filter(students::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(%id, removed, "student delete executed");
        Ok(())
    }
}
