//! Student resource handlers.
//!
//! ```text
//! POST   /students
//! GET    /students
//! PUT    /students/{id}
//! DELETE /students/{id}
//! ```
//!
//! Bodies are read as a loose [`JsonBody`] (a missing or non-JSON body is the
//! empty object) and coerced into a [`StudentDocument`]; the handlers then
//! make exactly one repository call each.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{Student, StudentDocument, StudentId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::extract::JsonBody;
use crate::inbound::http::schemas::{ErrorSchema, StudentPayloadSchema, StudentSchema};
use crate::inbound::http::state::HttpState;

/// Plain-text body returned by delete.
pub const DELETED_BODY: &str = "Deleted";

/// Create a student from the coerced payload.
#[utoipa::path(
    post,
    path = "/students",
    request_body = StudentPayloadSchema,
    responses(
        (status = 200, description = "Stored student with its new identifier", body = StudentSchema),
        (status = 500, description = "Coercion or store failure", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "createStudent"
)]
#[post("/students")]
pub async fn create_student(
    state: web::Data<HttpState>,
    payload: JsonBody,
) -> ApiResult<web::Json<Student>> {
    let document = StudentDocument::from_payload(&payload.into_inner())?;
    let student = state.students.create(&document).await?;
    Ok(web::Json(student))
}

/// List every student in insertion order.
#[utoipa::path(
    get,
    path = "/students",
    responses(
        (status = 200, description = "All students", body = [StudentSchema]),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "listStudents"
)]
#[get("/students")]
pub async fn list_students(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Student>>> {
    let students = state.students.list().await?;
    Ok(web::Json(students))
}

/// Replace the fields present in the payload.
///
/// Responds with JSON `null` when no student has the identifier.
#[utoipa::path(
    put,
    path = "/students/{id}",
    params(("id" = String, Path, description = "Student identifier")),
    request_body = StudentPayloadSchema,
    responses(
        (status = 200, description = "Updated student, or null when none matched", body = Option<StudentSchema>),
        (status = 500, description = "Malformed identifier, coercion or store failure", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "updateStudent"
)]
#[put("/students/{id}")]
pub async fn update_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: JsonBody,
) -> ApiResult<web::Json<Option<Student>>> {
    let id = StudentId::new(path.into_inner())?;
    let patch = StudentDocument::from_payload(&payload.into_inner())?;
    let updated = state.students.update(&id, &patch).await?;
    Ok(web::Json(updated))
}

/// Delete a student. Succeeds whether or not the student existed.
#[utoipa::path(
    delete,
    path = "/students/{id}",
    params(("id" = String, Path, description = "Student identifier")),
    responses(
        (status = 200, description = "Confirmation text", body = String, content_type = "text/plain"),
        (status = 500, description = "Malformed identifier or store failure", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "deleteStudent"
)]
#[delete("/students/{id}")]
pub async fn delete_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = StudentId::new(path.into_inner())?;
    state.students.delete(&id).await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(DELETED_BODY))
}

#[cfg(test)]
mod tests;
