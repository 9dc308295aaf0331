//! Tests for the student resource handlers.

use super::*;
use crate::domain::ports::{MockStudentRepository, StudentRepository, StudentRepositoryError};
use crate::inbound::http::extract::payload_config;
use crate::outbound::memory::InMemoryStudentRepository;
use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{App, test};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;

#[fixture]
fn store() -> Arc<InMemoryStudentRepository> {
    Arc::new(InMemoryStudentRepository::new())
}

async fn service(
    repo: Arc<dyn StudentRepository>,
) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::new(repo)))
            .app_data(payload_config())
            .service(create_student)
            .service(list_students)
            .service(update_student)
            .service(delete_student),
    )
    .await
}

async fn send(
    app: &impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    req: test::TestRequest,
) -> (StatusCode, Value) {
    let res = test::call_service(app, req.to_request()).await;
    let status = res.status();
    let body: Value = test::read_body_json(res).await;
    (status, body)
}

fn id_of(body: &Value) -> String {
    body.get("_id")
        .and_then(Value::as_str)
        .expect("response carries _id")
        .to_owned()
}

#[rstest]
#[actix_rt::test]
async fn create_returns_stored_document_with_new_id(store: Arc<InMemoryStudentRepository>) {
    let app = service(store.clone()).await;

    let (status, body) = send(
        &app,
        test::TestRequest::post()
            .uri("/students")
            .set_json(json!({ "name": "Ada", "age": 21 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    StudentId::new(id_of(&body)).expect("identifier is a UUID");
    assert_eq!(body.get("name"), Some(&json!("Ada")));
    assert_eq!(body.get("age"), Some(&json!(21)));
    assert_eq!(store.len().expect("len"), 1);
}

#[rstest]
#[case::numeric_string(json!({ "name": "Ada", "age": "21" }), json!({ "name": "Ada", "age": 21 }))]
#[case::blank_age(json!({ "name": "Ada", "age": "" }), json!({ "name": "Ada" }))]
#[case::numeric_name(json!({ "name": 7 }), json!({ "name": "7" }))]
#[case::unknown_keys(json!({ "name": "Ada", "house": "Slytherin" }), json!({ "name": "Ada" }))]
#[case::empty(json!({}), json!({}))]
#[actix_rt::test]
async fn create_coerces_payload(
    store: Arc<InMemoryStudentRepository>,
    #[case] payload: Value,
    #[case] expected_fields: Value,
) {
    let app = service(store).await;

    let (status, mut body) = send(
        &app,
        test::TestRequest::post().uri("/students").set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    body.as_object_mut().expect("object body").remove("_id");
    assert_eq!(body, expected_fields);
}

#[rstest]
#[case::no_body(test::TestRequest::post())]
#[case::empty_json(test::TestRequest::post().insert_header(("content-type", "application/json")))]
#[case::plain_text(
    test::TestRequest::post()
        .insert_header(("content-type", "text/plain"))
        .set_payload("Ada")
)]
#[actix_rt::test]
async fn create_without_json_body_stores_empty_record(
    store: Arc<InMemoryStudentRepository>,
    #[case] req: test::TestRequest,
) {
    let app = service(store.clone()).await;

    let (status, body) = send(&app, req.uri("/students")).await;

    assert_eq!(status, StatusCode::OK);
    let id = id_of(&body);
    assert_eq!(body, json!({ "_id": id }));
    assert_eq!(store.len().expect("len"), 1);
}

#[rstest]
#[actix_rt::test]
async fn update_without_body_returns_record_unchanged(store: Arc<InMemoryStudentRepository>) {
    let app = service(store).await;
    let (_, created) = send(
        &app,
        test::TestRequest::post()
            .uri("/students")
            .set_json(json!({ "name": "Ada", "age": 21 })),
    )
    .await;
    let id = id_of(&created);

    let (status, body) = send(
        &app,
        test::TestRequest::put().uri(&format!("/students/{id}")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[rstest]
#[actix_rt::test]
async fn uncoercible_age_is_a_server_error(store: Arc<InMemoryStudentRepository>) {
    let app = service(store.clone()).await;

    let (status, body) = send(
        &app,
        test::TestRequest::post()
            .uri("/students")
            .set_json(json!({ "name": "Ada", "age": "abc" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.get("code"), Some(&json!("invalid_request")));
    let message = body.get("error").and_then(Value::as_str).expect("message");
    assert!(message.contains("age"), "unexpected message: {message}");
    assert!(store.is_empty().expect("is_empty"));
}

#[rstest]
#[actix_rt::test]
async fn non_object_body_is_a_server_error(store: Arc<InMemoryStudentRepository>) {
    let app = service(store).await;

    let (status, body) = send(
        &app,
        test::TestRequest::post()
            .uri("/students")
            .set_json(json!(["Ada", 21])),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.get("code"), Some(&json!("invalid_request")));
}

#[rstest]
#[actix_rt::test]
async fn list_returns_every_created_document_in_order(store: Arc<InMemoryStudentRepository>) {
    let app = service(store).await;
    let mut ids = Vec::new();
    for name in ["Ada", "Grace", "Edsger"] {
        let (_, body) = send(
            &app,
            test::TestRequest::post()
                .uri("/students")
                .set_json(json!({ "name": name })),
        )
        .await;
        ids.push(id_of(&body));
    }

    let (status, body) = send(&app, test::TestRequest::get().uri("/students")).await;

    assert_eq!(status, StatusCode::OK);
    let listed: Vec<String> = body
        .as_array()
        .expect("array body")
        .iter()
        .map(id_of)
        .collect();
    assert_eq!(listed, ids);
}

#[rstest]
#[actix_rt::test]
async fn update_replaces_only_present_fields(store: Arc<InMemoryStudentRepository>) {
    let app = service(store).await;
    let (_, created) = send(
        &app,
        test::TestRequest::post()
            .uri("/students")
            .set_json(json!({ "name": "Ada", "age": 21 })),
    )
    .await;
    let id = id_of(&created);

    let (status, body) = send(
        &app,
        test::TestRequest::put()
            .uri(&format!("/students/{id}"))
            .set_json(json!({ "age": "22", "_id": "ignored" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "_id": id, "name": "Ada", "age": 22 }));
}

#[rstest]
#[actix_rt::test]
async fn update_of_unknown_id_returns_null(store: Arc<InMemoryStudentRepository>) {
    let app = service(store).await;

    let (status, body) = send(
        &app,
        test::TestRequest::put()
            .uri(&format!("/students/{}", StudentId::random()))
            .set_json(json!({ "name": "Nobody" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[rstest]
#[case::put(test::TestRequest::put().set_json(json!({ "name": "Ada" })))]
#[case::delete(test::TestRequest::delete())]
#[actix_rt::test]
async fn malformed_identifier_is_a_server_error(#[case] req: test::TestRequest) {
    let mut repo = MockStudentRepository::new();
    repo.expect_update().never();
    repo.expect_delete().never();
    let app = service(Arc::new(repo)).await;

    let (status, body) = send(&app, req.uri("/students/not-a-uuid")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.get("code"), Some(&json!("invalid_request")));
}

#[rstest]
#[actix_rt::test]
async fn delete_confirms_with_plain_text_whether_or_not_present(
    store: Arc<InMemoryStudentRepository>,
) {
    let app = service(store.clone()).await;
    let (_, created) = send(
        &app,
        test::TestRequest::post()
            .uri("/students")
            .set_json(json!({ "name": "Ada" })),
    )
    .await;

    for id in [id_of(&created), StudentId::random().to_string()] {
        let res = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/students/{id}"))
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .expect("content type");
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(test::read_body(res).await.as_ref(), DELETED_BODY.as_bytes());
    }

    assert!(store.is_empty().expect("is_empty"));
}

#[rstest]
#[actix_rt::test]
async fn store_failures_surface_raw_message() {
    let mut repo = MockStudentRepository::new();
    repo.expect_list()
        .times(1)
        .returning(|| Err(StudentRepositoryError::connection("connection refused")));
    let app = service(Arc::new(repo)).await;

    let (status, body) = send(&app, test::TestRequest::get().uri("/students")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body.get("error"),
        Some(&json!("document store connection failed: connection refused"))
    );
    assert_eq!(body.get("code"), Some(&json!("store_unavailable")));
}

#[rstest]
#[actix_rt::test]
async fn query_failures_on_create_are_internal_errors() {
    let mut repo = MockStudentRepository::new();
    repo.expect_create()
        .times(1)
        .returning(|_| Err(StudentRepositoryError::query("disk full")));
    let app = service(Arc::new(repo)).await;

    let (status, body) = send(
        &app,
        test::TestRequest::post()
            .uri("/students")
            .set_json(json!({ "name": "Ada" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.get("code"), Some(&json!("internal_error")));
    assert_eq!(
        body.get("error"),
        Some(&json!("document store query failed: disk full"))
    );
}
