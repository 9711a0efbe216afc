//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};
use serde_json::Value;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn internal_error() -> Error {
    Error::internal("connection refused by 10.0.0.7")
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "host": "10.0.0.7" }))
}

async fn body_of(response: HttpResponse) -> Value {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error JSON")
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(internal_error: Error) {
    let response = ResponseError::error_response(&internal_error);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok()),
        Some(TRACE_ID)
    );

    let body = body_of(response).await;
    assert_eq!(body["message"], "Internal server error");
    assert_eq!(body["traceId"], TRACE_ID);
    assert!(body.get("details").is_none());
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details() {
    let error = Error::invalid_request("invalid argument email")
        .with_details(json!({ "field": "email" }));
    let response = ResponseError::error_response(&error);
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());

    let body = body_of(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["message"], "invalid argument email");
    assert_eq!(body["details"]["field"], "email");
}

#[rstest]
#[case("user", "user not found")]
#[case("product", "product not found")]
#[case("order", "order not found")]
fn not_found_names_the_entity(#[case] entity: &str, #[case] message: &str) {
    let error = map_repository_error(RepositoryError::not_found(entity, "k"));
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), message);
}

#[rstest]
fn invalid_identifiers_are_client_errors() {
    let error = map_repository_error(RepositoryError::invalid_identifier("abc"));
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), "invalid argument id");
    assert_eq!(
        error.details().and_then(|d| d.get("value")).and_then(Value::as_str),
        Some("abc")
    );
}

#[rstest]
#[case(RepositoryError::connection("refused"))]
#[case(RepositoryError::query("bad filter"))]
#[case(RepositoryError::timeout(10_000_u64))]
fn storage_faults_are_internal(#[case] err: RepositoryError) {
    assert_eq!(map_repository_error(err).code(), ErrorCode::InternalError);
}
