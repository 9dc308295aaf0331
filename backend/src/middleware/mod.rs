//! Request middleware.
//!
//! Purpose: cross-cutting request lifecycle concerns: trace identifiers with
//! request spans, and permissive cross-origin headers for the browser client.

pub mod cors;
pub mod trace;

pub use cors::cors;
pub use trace::Trace;
