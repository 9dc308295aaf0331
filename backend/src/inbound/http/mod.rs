//! HTTP inbound adapter exposing the student resource, probes and the
//! browser client.

pub mod client;
pub mod error;
pub mod extract;
pub mod health;
pub mod schemas;
pub mod state;
pub mod students;

pub use error::ApiResult;
