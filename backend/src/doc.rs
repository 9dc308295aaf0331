//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint and the schema wrappers from
//! [`crate::inbound::http::schemas`], which describe the wire shapes without
//! coupling domain types to utoipa. Debug builds serve it through Swagger UI;
//! `cargo run --bin openapi-dump` prints it for external tooling.

use crate::inbound::http::health::StatusResponse;
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, StudentPayloadSchema, StudentSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student records API",
        description = "Create, list, update and delete student documents.",
        license(name = "ISC", url = "https://opensource.org/licenses/ISC")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::students::create_student,
        crate::inbound::http::students::list_students,
        crate::inbound::http::students::update_student,
        crate::inbound::http::students::delete_student,
        crate::inbound::http::health::status,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::client::client_page,
    ),
    components(schemas(
        StudentSchema,
        StudentPayloadSchema,
        ErrorSchema,
        ErrorCodeSchema,
        StatusResponse
    )),
    tags(
        (name = "students", description = "Student record operations"),
        (name = "health", description = "Status and health probes"),
        (name = "client", description = "Browser client")
    )
)]
pub struct ApiDoc;
