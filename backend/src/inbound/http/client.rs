//! Browser client page.
//!
//! A single static page with inline script, compiled into the binary and
//! served from the same origin as the API.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get};

/// The client page markup.
pub const CLIENT_PAGE: &str = include_str!("../../../static/index.html");

/// Serve the browser client.
#[utoipa::path(
    get,
    path = "/app",
    tags = ["client"],
    responses((status = 200, description = "Browser client page", content_type = "text/html"))
)]
#[get("/app")]
pub async fn client_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(CLIENT_PAGE)
}
