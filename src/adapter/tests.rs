use super::*;
use crate::error::ErrorCode;
use crate::registry::HttpStatus;
use crate::response::ResponseSpec;
use serde_json::json;
use std::collections::HashMap;

fn headers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_parsed_request_splits_target() {
    let req = ParsedRequest::new("GET", "/pets/1?limit=10", HashMap::new(), None);
    assert_eq!(req.path(), "/pets/1");
    assert_eq!(req.query(), "limit=10");
}

#[test]
fn test_parsed_request_lowercases_headers() {
    let req = ParsedRequest::new(
        "GET",
        "/",
        headers(&[("Content-Type", "application/json")]),
        None,
    );
    assert_eq!(
        req.headers().get("content-type"),
        Some(&"application/json".to_string())
    );
}

#[test]
fn test_body_parse_failure_is_deferred_to_accessor() {
    let req = ParsedRequest::new("POST", "/", HashMap::new(), Some(b"{not json"));
    assert!(req.body().is_err());
}

#[test]
fn test_empty_body_is_absent() {
    let req = ParsedRequest::new("POST", "/", HashMap::new(), Some(b""));
    assert_eq!(req.body().unwrap(), None);
}

#[test]
fn test_from_url_extracts_path_and_query() {
    let req = ParsedRequest::from_url(
        "GET",
        "https://example.test/api/pets/1?debug=true",
        HashMap::new(),
        None,
    )
    .unwrap();
    assert_eq!(req.path(), "/api/pets/1");
    assert_eq!(req.query(), "debug=true");
}

#[test]
fn test_from_url_rejects_garbage() {
    let err = ParsedRequest::from_url("GET", "not a url", HashMap::new(), None).unwrap_err();
    assert_eq!(err.code, ErrorCode::FailedToParseRequest);
}

#[test]
fn test_from_http_request() {
    let http_req = http::Request::builder()
        .method("POST")
        .uri("/pets?tag=dog")
        .header("X-Request-Id", "01ARZ3NDEKTSV4RRFFQ69G5FAV")
        .body(br#"{"name":"rex"}"#.to_vec())
        .unwrap();
    let req = ParsedRequest::from_http(&http_req);
    assert_eq!(req.method(), "POST");
    assert_eq!(req.path(), "/pets");
    assert_eq!(req.query(), "tag=dog");
    assert_eq!(
        req.headers().get("x-request-id"),
        Some(&"01ARZ3NDEKTSV4RRFFQ69G5FAV".to_string())
    );
    assert_eq!(req.body().unwrap(), Some(json!({ "name": "rex" })));
}

#[test]
fn test_response_payload_shape() {
    let spec = ResponseSpec::new(HttpStatus::Created, json!({ "id": 5 }));
    assert_eq!(
        response_payload(&spec),
        json!({
            "status": "CREATED",
            "statusCode": 201,
            "statusType": "SUCCESS",
            "data": { "id": 5 },
        })
    );
}

#[test]
fn test_http_adapter_sets_status_and_headers() {
    let mut spec = ResponseSpec::new(HttpStatus::Created, json!({ "id": 5 }));
    spec.headers
        .insert("location".to_string(), "/pets/5".to_string());
    let response = HttpAdapter.adapt(&spec);
    assert_eq!(response.status(), http::StatusCode::CREATED);
    assert_eq!(
        response.headers().get("location").unwrap(),
        &http::HeaderValue::from_static("/pets/5")
    );
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        &http::HeaderValue::from_static("application/json")
    );
    assert_eq!(response.body()["statusCode"], json!(201));
}

#[test]
fn test_http_adapter_skips_unrepresentable_headers() {
    let mut spec = ResponseSpec::new(HttpStatus::Ok, json!({}));
    spec.headers
        .insert("bad header name".to_string(), "x".to_string());
    let response = HttpAdapter.adapt(&spec);
    assert_eq!(response.status(), http::StatusCode::OK);
    assert!(response.headers().get("bad header name").is_none());
}
