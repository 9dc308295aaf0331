//! Domain ports for the hexagonal boundary.
//!
//! Handlers talk to the document store exclusively through
//! [`StudentRepository`]; outbound adapters implement it.

mod student_repository;

#[cfg(test)]
pub use student_repository::MockStudentRepository;
pub use student_repository::{StudentRepository, StudentRepositoryError};
