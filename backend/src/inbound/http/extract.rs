//! Request body extraction.
//!
//! Bodies declared as JSON (`application/json` or a `+json` suffix) are
//! parsed; an empty JSON body, or a body of any other content type, reads as
//! the empty object. Malformed JSON and oversized bodies fail through the
//! domain [`Error`] so they render like every other failure.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest, mime, web};
use futures_util::future::LocalBoxFuture;
use serde_json::{Map, Value};

use crate::domain::Error;

/// Largest accepted request body.
pub const JSON_BODY_LIMIT: usize = 100 * 1024;

/// Body size settings shared by every handler.
pub fn payload_config() -> web::PayloadConfig {
    web::PayloadConfig::new(JSON_BODY_LIMIT)
}

/// Loosely typed JSON request body.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody(pub Value);

impl JsonBody {
    /// The parsed body.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

fn declares_json(req: &HttpRequest) -> bool {
    match req.mime_type() {
        Ok(Some(mime)) => {
            mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON)
        }
        _ => false,
    }
}

fn parse_body(declared_json: bool, bytes: &[u8]) -> Result<Value, Error> {
    if !declared_json || bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(bytes).map_err(|err| Error::invalid_request(err.to_string()))
}

impl FromRequest for JsonBody {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let declared_json = declares_json(req);
        let bytes = web::Bytes::from_request(req, payload);
        Box::pin(async move {
            let bytes = bytes
                .await
                .map_err(|err| Error::invalid_request(err.to_string()))?;
            Ok(Self(parse_body(declared_json, &bytes)?))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test};
    use rstest::rstest;
    use serde_json::json;

    async fn echo(body: JsonBody) -> HttpResponse {
        HttpResponse::Ok().json(body.into_inner())
    }

    #[rstest]
    #[case::json(Some("application/json"), r#"{"name":"Ada"}"#, json!({ "name": "Ada" }))]
    #[case::json_with_charset(Some("application/json; charset=utf-8"), r#"{"age":3}"#, json!({ "age": 3 }))]
    #[case::json_suffix(Some("application/merge-patch+json"), r#"{"age":3}"#, json!({ "age": 3 }))]
    #[case::empty_json(Some("application/json"), "", json!({}))]
    #[case::no_body(None, "", json!({}))]
    #[case::plain_text(Some("text/plain"), "Ada", json!({}))]
    #[case::form(Some("application/x-www-form-urlencoded"), "name=Ada", json!({}))]
    #[actix_rt::test]
    async fn reads_body_by_declared_type(
        #[case] content_type: Option<&str>,
        #[case] body: &'static str,
        #[case] expected: Value,
    ) {
        let app = test::init_service(
            App::new()
                .app_data(payload_config())
                .route("/", web::post().to(echo)),
        )
        .await;
        let mut req = test::TestRequest::post().uri("/").set_payload(body);
        if let Some(content_type) = content_type {
            req = req.insert_header(("content-type", content_type));
        }

        let res = test::call_service(&app, req.to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);
        let echoed: Value = test::read_body_json(res).await;
        assert_eq!(echoed, expected);
    }

    #[rstest]
    #[case::malformed("{not json".to_owned())]
    #[case::oversized(format!(r#"{{"name":"{}"}}"#, "a".repeat(JSON_BODY_LIMIT)))]
    #[actix_rt::test]
    async fn unreadable_json_renders_domain_error(#[case] body: String) {
        let app = test::init_service(
            App::new()
                .app_data(payload_config())
                .route("/", web::post().to(echo)),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/")
            .insert_header(("content-type", "application/json"))
            .set_payload(body)
            .to_request();

        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(
            body.get("code").and_then(Value::as_str),
            Some("invalid_request")
        );
        assert!(body.get("error").and_then(Value::as_str).is_some());
    }
}
