//! Tests for error normalization
//!
//! # Test Coverage
//!
//! - Each of the seven error codes produces exactly the registry's numeric
//!   status through `handle_error`
//! - Unrecognized failures (plain errors, handler panics) normalize to
//!   `500 {"name": "unknown", "message": ""}`
//! - Error headers survive into the transport response

use apivalve::adapter::{HttpAdapter, ParsedRequest};
use apivalve::error::{handle_error, ErrorCode, RequestError};
use apivalve::pipeline::Endpoint;
use apivalve::registry::{HttpMethod, HttpStatus};
use serde_json::json;
use std::collections::HashMap;

#[test]
fn test_every_code_maps_to_its_registered_status() {
    let expected: &[(ErrorCode, u16)] = &[
        (ErrorCode::Unknown, 500),
        (ErrorCode::InvalidMethod, 400),
        (ErrorCode::InvalidQueryParams, 400),
        (ErrorCode::InvalidPathParams, 400),
        (ErrorCode::InvalidHeaders, 400),
        (ErrorCode::InvalidBody, 422),
        (ErrorCode::FailedToParseRequest, 400),
    ];
    assert_eq!(expected.len(), ErrorCode::ALL.len());
    for (code, status) in expected {
        let err = anyhow::Error::new(RequestError::new(*code, "boom"));
        let response = handle_error(&err, &HttpAdapter);
        assert_eq!(
            response.status().as_u16(),
            *status,
            "status mismatch for {code}"
        );
        assert_eq!(response.body()["data"]["name"], json!(code.name()));
        assert_eq!(response.body()["data"]["message"], json!("boom"));
    }
}

#[test]
fn test_plain_error_normalizes_to_unknown() {
    let err = anyhow::anyhow!("some string thrown from nowhere");
    let response = handle_error(&err, &HttpAdapter);
    assert_eq!(response.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body()["data"],
        json!({ "name": "unknown", "message": "" })
    );
}

#[test]
fn test_panic_through_pipeline_normalizes_to_unknown() {
    let endpoint = Endpoint::new(HttpMethod::Get, "/explode").base_path("");
    let req = ParsedRequest::new("GET", "/explode", HashMap::new(), None);
    let response = endpoint.dispatch(&req, &HttpAdapter, |_| panic!("raw panic payload"));
    assert_eq!(response.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body()["data"],
        json!({ "name": "unknown", "message": "" })
    );
}

#[test]
fn test_error_headers_reach_the_transport() {
    let mut headers = HashMap::new();
    headers.insert("retry-after".to_string(), "30".to_string());
    let err = anyhow::Error::new(
        RequestError::new(ErrorCode::Unknown, "overloaded").with_headers(headers),
    );
    let response = handle_error(&err, &HttpAdapter);
    assert_eq!(response.headers()["retry-after"], "30");
}

#[test]
fn test_error_spec_status_is_consistent_with_registry() {
    for code in ErrorCode::ALL {
        let spec = RequestError::new(code, "").to_response_spec();
        assert_eq!(spec.status, code.status());
        assert_eq!(spec.status.code(), code.status().code());
    }
    assert_eq!(ErrorCode::InvalidBody.status(), HttpStatus::UnprocessableEntity);
}
