//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the repository port and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::StudentRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Document store holding student records.
    pub students: Arc<dyn StudentRepository>,
}

impl HttpState {
    /// Construct state around a repository.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use student_records::inbound::http::state::HttpState;
    /// use student_records::outbound::memory::InMemoryStudentRepository;
    ///
    /// let state = HttpState::new(Arc::new(InMemoryStudentRepository::new()));
    /// let _students = state.students.clone();
    /// ```
    pub fn new(students: Arc<dyn StudentRepository>) -> Self {
        Self { students }
    }
}
