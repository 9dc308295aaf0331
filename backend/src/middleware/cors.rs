//! Permissive cross-origin policy for the browser client.
//!
//! Any origin may call the API. Responses carry `Access-Control-Allow-Origin:
//! *`, and browser preflights (`OPTIONS` with `Origin` and
//! `Access-Control-Request-Method`) are answered with `200` before routing.

use actix_cors::Cors;

/// Methods a cross-origin caller may use.
pub const ALLOWED_METHODS: [&str; 5] = ["GET", "POST", "PUT", "DELETE", "OPTIONS"];
/// Request headers a cross-origin caller may send.
pub const ALLOWED_HEADERS: [&str; 4] = ["Origin", "X-Requested-With", "Content-Type", "Accept"];

/// Build the cross-origin middleware.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use student_records::{Trace, cors};
///
/// let app = App::new().wrap(cors()).wrap(Trace);
/// ```
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(ALLOWED_METHODS)
        .allowed_headers(ALLOWED_HEADERS)
}
