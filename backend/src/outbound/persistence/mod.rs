//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Each student is one row holding a JSONB document, so the table behaves as
//! a schema-flexible document store. Access goes through `diesel-async` with
//! `bb8` connection pooling.
//!
//! Row structs (`models.rs`) and table definitions (`schema.rs`) stay private
//! to this module; the domain only sees [`DieselStudentRepository`] through
//! the `StudentRepository` port.
//!
//! # Example
//!
//! ```ignore
//! use student_records::outbound::persistence::{DbPool, DieselStudentRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/students")).await?;
//! let repo = DieselStudentRepository::new(pool);
//! ```

mod diesel_student_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_student_repository::DieselStudentRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
