use super::*;
use crate::adapter::{BodyParseError, ParsedRequest, TxAdapter, TxRequest};
use crate::error::ErrorCode;
use crate::registry::{HttpMethod, HttpStatus};
use crate::response::{ResponseShape, ResponseSpec};
use crate::schema::Validation;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Adapter that hands the spec back unchanged, for asserting on outcomes.
struct SpecAdapter;

impl TxAdapter for SpecAdapter {
    type Response = ResponseSpec;

    fn adapt(&self, spec: &ResponseSpec) -> ResponseSpec {
        spec.clone()
    }
}

/// Wraps a request and counts how often the transport body is consulted.
struct CountingRequest {
    inner: ParsedRequest,
    body_reads: Arc<AtomicUsize>,
}

impl TxRequest for CountingRequest {
    fn method(&self) -> &str {
        self.inner.method()
    }
    fn path(&self) -> &str {
        self.inner.path()
    }
    fn query(&self) -> &str {
        self.inner.query()
    }
    fn headers(&self) -> &HashMap<String, String> {
        self.inner.headers()
    }
    fn body(&self) -> Result<Option<Value>, BodyParseError> {
        self.body_reads.fetch_add(1, Ordering::SeqCst);
        self.inner.body()
    }
}

fn get(target: &str) -> ParsedRequest {
    ParsedRequest::new("GET", target, HashMap::new(), None)
}

fn post(target: &str, body: &[u8]) -> ParsedRequest {
    ParsedRequest::new("POST", target, HashMap::new(), Some(body))
}

/// Validator that records invocations before delegating to accept-anything.
fn probe(counter: &Arc<AtomicUsize>) -> Box<dyn crate::schema::Validate> {
    let counter = Arc::clone(counter);
    Box::new(move |value: &Value| {
        counter.fetch_add(1, Ordering::SeqCst);
        Validation::Valid(value.clone())
    })
}

#[test]
fn test_method_mismatch_rejected_before_anything_else() {
    let path_probe = Arc::new(AtomicUsize::new(0));
    let query_probe = Arc::new(AtomicUsize::new(0));
    let header_probe = Arc::new(AtomicUsize::new(0));
    let body_probe = Arc::new(AtomicUsize::new(0));
    let body_reads = Arc::new(AtomicUsize::new(0));

    let endpoint = Endpoint::new(HttpMethod::Post, "/pets")
        .path_params_validator(probe(&path_probe))
        .query_validator(probe(&query_probe))
        .header_validator(probe(&header_probe))
        .body_validator(probe(&body_probe));

    let req = CountingRequest {
        inner: get("/pets"),
        body_reads: Arc::clone(&body_reads),
    };
    let err = endpoint.validate_request(&req).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidMethod);
    assert_eq!(path_probe.load(Ordering::SeqCst), 0);
    assert_eq!(query_probe.load(Ordering::SeqCst), 0);
    assert_eq!(header_probe.load(Ordering::SeqCst), 0);
    assert_eq!(body_probe.load(Ordering::SeqCst), 0);
    assert_eq!(body_reads.load(Ordering::SeqCst), 0);
}

#[test]
fn test_path_params_extracted_and_validated() {
    let endpoint = Endpoint::new(HttpMethod::Get, "/projects/:project/documents/:document")
        .path_params_schema(&json!({
            "type": "object",
            "properties": {
                "project": { "type": "string" },
                "document": { "type": "string" },
            },
            "required": ["project", "document"],
        }))
        .unwrap();

    let params = endpoint
        .validate_request(&get("/projects/42/documents/99"))
        .unwrap();
    assert_eq!(params.path_params.get("project"), Some(&"42".to_string()));
    assert_eq!(params.path_params.get("document"), Some(&"99".to_string()));

    // Missing segment: no match, and the schema rejects the empty map.
    let err = endpoint.validate_request(&get("/projects/42")).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidPathParams);
}

#[test]
fn test_literal_mismatch_rejected_via_schema() {
    let endpoint = Endpoint::new(HttpMethod::Get, "/pets/:id")
        .path_params_schema(&json!({
            "type": "object",
            "properties": { "id": { "type": "string" } },
            "required": ["id"],
        }))
        .unwrap();
    let err = endpoint.validate_request(&get("/cats/1")).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidPathParams);
}

#[test]
fn test_header_validation_failure() {
    let endpoint = Endpoint::new(HttpMethod::Get, "/secure")
        .header_schema(&json!({
            "type": "object",
            "required": ["authorization"],
        }))
        .unwrap();
    let err = endpoint.validate_request(&get("/secure")).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidHeaders);

    let mut headers = HashMap::new();
    headers.insert("Authorization".to_string(), "Bearer t".to_string());
    let req = ParsedRequest::new("GET", "/secure", headers, None);
    assert!(endpoint.validate_request(&req).is_ok());
}

#[test]
fn test_query_parsed_nested_before_validation() {
    let seen = Arc::new(std::sync::Mutex::new(Value::Null));
    let seen_clone = Arc::clone(&seen);
    let endpoint = Endpoint::new(HttpMethod::Get, "/search").query_validator(Box::new(
        move |value: &Value| {
            *seen_clone.lock().unwrap() = value.clone();
            Validation::Valid(value.clone())
        },
    ));
    let params = endpoint
        .validate_request(&get("/search?a[b]=1&a[c]=2"))
        .unwrap();
    assert_eq!(*seen.lock().unwrap(), json!({ "a": { "b": "1", "c": "2" } }));
    assert_eq!(params.query_params, json!({ "a": { "b": "1", "c": "2" } }));
}

#[test]
fn test_query_validation_failure() {
    let endpoint = Endpoint::new(HttpMethod::Get, "/search")
        .query_schema(&json!({
            "type": "object",
            "required": ["q"],
        }))
        .unwrap();
    let err = endpoint.validate_request(&get("/search")).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidQueryParams);
}

#[test]
fn test_no_body_endpoint_never_reads_transport_body() {
    let body_reads = Arc::new(AtomicUsize::new(0));
    let endpoint = Endpoint::new(HttpMethod::Get, "/pets");
    let req = CountingRequest {
        inner: get("/pets"),
        body_reads: Arc::clone(&body_reads),
    };
    let params = endpoint.validate_request(&req).unwrap();
    assert_eq!(params.body, Value::Null);
    assert_eq!(body_reads.load(Ordering::SeqCst), 0);
}

#[test]
fn test_required_body_missing_is_invalid_body() {
    let endpoint = Endpoint::new(HttpMethod::Post, "/pets");
    let req = ParsedRequest::new("POST", "/pets", HashMap::new(), None);
    let err = endpoint.validate_request(&req).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidBody);
}

#[test]
fn test_malformed_body_is_invalid_body() {
    let endpoint = Endpoint::new(HttpMethod::Post, "/pets");
    let err = endpoint
        .validate_request(&post("/pets", b"{not json"))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidBody);
}

#[test]
fn test_body_schema_rejection() {
    let endpoint = Endpoint::new(HttpMethod::Post, "/pets")
        .body_schema(&json!({
            "type": "object",
            "properties": { "name": { "type": "string" } },
            "required": ["name"],
        }))
        .unwrap();
    let err = endpoint
        .validate_request(&post("/pets", br#"{"name": 7}"#))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidBody);

    let params = endpoint
        .validate_request(&post("/pets", br#"{"name": "rex"}"#))
        .unwrap();
    assert_eq!(params.body, json!({ "name": "rex" }));
}

#[test]
fn test_dispatch_success_path() {
    let endpoint = Endpoint::new(HttpMethod::Get, "/pets/:id")
        .response(ResponseShape::new(HttpStatus::Ok));
    let response = endpoint.dispatch(&get("/pets/7"), &SpecAdapter, |args| {
        assert_eq!(args.method, HttpMethod::Get);
        assert_eq!(args.path, "/pets/7");
        let id = args.params.path_params.get("id").cloned().unwrap_or_default();
        Ok(args.generators.respond(HttpStatus::Ok, json!({ "id": id }))?)
    });
    assert_eq!(response.status, HttpStatus::Ok);
    assert_eq!(response.body, json!({ "id": "7" }));
}

#[test]
fn test_dispatch_translates_validation_failure() {
    let endpoint = Endpoint::new(HttpMethod::Post, "/pets");
    let response = endpoint.dispatch(&get("/pets"), &SpecAdapter, |_| {
        panic!("handler must not run");
    });
    assert_eq!(response.status, HttpStatus::BadRequest);
    assert_eq!(response.body["name"], json!("invalid-method"));
}

#[test]
fn test_handler_error_becomes_unknown_500() {
    let endpoint = Endpoint::new(HttpMethod::Get, "/boom");
    let response = endpoint.dispatch(&get("/boom"), &SpecAdapter, |_| {
        Err(anyhow::anyhow!("database exploded"))
    });
    assert_eq!(response.status, HttpStatus::InternalServerError);
    assert_eq!(response.body, json!({ "name": "unknown", "message": "" }));
}

#[test]
fn test_handler_panic_becomes_unknown_500() {
    let endpoint = Endpoint::new(HttpMethod::Get, "/boom");
    let response = endpoint.dispatch(&get("/boom"), &SpecAdapter, |_| {
        panic!("plain panic, not a RequestError");
    });
    assert_eq!(response.status, HttpStatus::InternalServerError);
    assert_eq!(response.body, json!({ "name": "unknown", "message": "" }));
}

#[test]
fn test_handler_request_error_keeps_its_code() {
    use crate::error::RequestError;
    let endpoint = Endpoint::new(HttpMethod::Get, "/teapot");
    let response = endpoint.dispatch(&get("/teapot"), &SpecAdapter, |_| {
        Err(RequestError::new(ErrorCode::InvalidHeaders, "spout missing").into())
    });
    assert_eq!(response.status, HttpStatus::BadRequest);
    assert_eq!(response.body["name"], json!("invalid-headers"));
    assert_eq!(response.body["message"], json!("spout missing"));
}

#[test]
fn test_base_path_stripped_before_matching() {
    let endpoint = Endpoint::new(HttpMethod::Get, "/pets/:id")
        .base_path("/api")
        .path_params_schema(&json!({
            "type": "object",
            "required": ["id"],
        }))
        .unwrap();
    assert!(endpoint.validate_request(&get("/api/pets/3")).is_ok());
    assert!(endpoint.validate_request(&get("/pets/3")).is_ok());
}

#[test]
fn test_optional_body_absent_validates_null() {
    let endpoint = Endpoint::new(HttpMethod::Post, "/notes").require_body(false);
    let req = ParsedRequest::new("POST", "/notes", HashMap::new(), None);
    let params = endpoint.validate_request(&req).unwrap();
    assert_eq!(params.body, Value::Null);
}
