//! Inbound adapters that translate external requests into port calls while
//! keeping framework details at the edge.
//!
//! HTTP handlers and the browser client page live under [`http`].

pub mod http;
