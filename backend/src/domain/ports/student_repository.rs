//! Driven port for the student document store.
//!
//! The four operations mirror the resource verbs one-to-one. Adapters carry
//! no business rules: payloads arrive already coerced, and "no such record"
//! is an ordinary outcome (`None` or a silent no-op), never an error.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Student, StudentDocument, StudentId};

/// Errors raised by document store adapters.
///
/// Both variants keep the store's own message text; it is what clients see.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudentRepositoryError {
    /// The store could not be reached or a connection could not be checked out.
    #[error("document store connection failed: {message}")]
    Connection { message: String },
    /// The store rejected or failed the operation.
    #[error("document store query failed: {message}")]
    Query { message: String },
}

impl StudentRepositoryError {
    /// Helper for connectivity failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for failed operations.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for creating, listing, updating and deleting student documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Insert a document and return it with its newly assigned identifier.
    async fn create(&self, document: &StudentDocument) -> Result<Student, StudentRepositoryError>;

    /// Every stored document in insertion order.
    async fn list(&self) -> Result<Vec<Student>, StudentRepositoryError>;

    /// Merge `patch` over the document with `id` and return the result.
    ///
    /// Returns `Ok(None)` when no document has that identifier.
    async fn update(
        &self,
        id: &StudentId,
        patch: &StudentDocument,
    ) -> Result<Option<Student>, StudentRepositoryError>;

    /// Remove the document with `id`. Removing a missing document succeeds.
    async fn delete(&self, id: &StudentId) -> Result<(), StudentRepositoryError>;
}
