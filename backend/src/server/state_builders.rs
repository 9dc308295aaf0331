//! Builders for HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use student_records::domain::ports::StudentRepository;
use student_records::inbound::http::state::HttpState;
use student_records::outbound::memory::InMemoryStudentRepository;
use student_records::outbound::persistence::{DbPool, DieselStudentRepository};

use super::ServerConfig;

/// Pick the student repository: PostgreSQL when a pool is configured,
/// otherwise an in-memory store.
pub(super) fn build_student_repository(pool: Option<&DbPool>) -> Arc<dyn StudentRepository> {
    match pool {
        Some(pool) => {
            info!("using PostgreSQL document store");
            Arc::new(DieselStudentRepository::new(pool.clone()))
        }
        None => {
            warn!("no database configured; student records are kept in memory");
            Arc::new(InMemoryStudentRepository::new())
        }
    }
}

/// Build the shared HTTP state for `config`.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let students = build_student_repository(config.db_pool.as_ref());
    web::Data::new(HttpState::new(students))
}
