//! Tests for HTTP error mapping.

use super::*;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::rstest;

#[rstest]
#[case(Error::malformed_body("bad json"), StatusCode::BAD_REQUEST)]
#[case(Error::invalid_geometry("bad geometry"), StatusCode::BAD_REQUEST)]
#[case(Error::invalid_request("bad request"), StatusCode::BAD_REQUEST)]
#[case(Error::store_failure("db down"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

async fn body_text(error: &Error) -> (StatusCode, String, String) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let bytes = to_bytes(response.into_body()).await.expect("body bytes");
    let text = String::from_utf8(bytes.to_vec()).expect("utf8 body");
    (status, content_type, text)
}

#[rstest]
#[actix_rt::test]
async fn client_errors_echo_their_message_as_html() {
    let error = Error::invalid_geometry("Input is not a valid GeoJSON Geometry type.");
    let (status, content_type, text) = body_text(&error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(content_type.starts_with("text/html"));
    assert_eq!(text, "Input is not a valid GeoJSON Geometry type.");
}

#[rstest]
#[actix_rt::test]
async fn store_failures_are_redacted() {
    let error = Error::store_failure("password authentication failed for user geo");
    let (status, _, text) = body_text(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(text, STORE_FAILURE_MESSAGE);
    assert!(!text.contains("password"));
}
