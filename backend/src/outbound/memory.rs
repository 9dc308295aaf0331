//! In-memory document store.
//!
//! Implements the `StudentRepository` port over a vector guarded by a
//! `RwLock`, keeping insertion order. Used by the test suites and by the
//! server when no database URL is configured; contents are lost on restart.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{StudentRepository, StudentRepositoryError};
use crate::domain::{Student, StudentDocument, StudentId};

/// Process-local `StudentRepository`.
#[derive(Debug, Default)]
pub struct InMemoryStudentRepository {
    documents: RwLock<Vec<(StudentId, StudentDocument)>>,
}

impl InMemoryStudentRepository {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> Result<usize, StudentRepositoryError> {
        Ok(self.documents.read().map_err(poisoned)?.len())
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> Result<bool, StudentRepositoryError> {
        self.len().map(|len| len == 0)
    }
}

fn poisoned<T>(_: PoisonError<T>) -> StudentRepositoryError {
    StudentRepositoryError::query("in-memory store lock poisoned")
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn create(&self, document: &StudentDocument) -> Result<Student, StudentRepositoryError> {
        let id = StudentId::random();
        self.documents
            .write()
            .map_err(poisoned)?
            .push((id, document.clone()));
        Ok(document.clone().into_student(id))
    }

    async fn list(&self) -> Result<Vec<Student>, StudentRepositoryError> {
        let documents = self.documents.read().map_err(poisoned)?;
        Ok(documents
            .iter()
            .map(|(id, document)| document.clone().into_student(*id))
            .collect())
    }

    async fn update(
        &self,
        id: &StudentId,
        patch: &StudentDocument,
    ) -> Result<Option<Student>, StudentRepositoryError> {
        let mut documents = self.documents.write().map_err(poisoned)?;
        Ok(documents
            .iter_mut()
            .find(|(stored_id, _)| stored_id == id)
            .map(|(stored_id, document)| {
                document.merge(patch);
                document.clone().into_student(*stored_id)
            }))
    }

    async fn delete(&self, id: &StudentId) -> Result<(), StudentRepositoryError> {
        self.documents
            .write()
            .map_err(poisoned)?
            .retain(|(stored_id, _)| stored_id != id);
        Ok(())
    }
}
