//! Student records service: a REST resource over a JSON document store plus
//! a browser client page.
//!
//! Layout follows ports and adapters: [`domain`] holds the student model,
//! coercion rules, errors and the repository port; [`inbound`] adapts HTTP;
//! [`outbound`] provides the PostgreSQL and in-memory stores.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::{Trace, cors};
