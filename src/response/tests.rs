use super::*;
use crate::registry::HttpStatus;
use serde_json::{json, Value};
use std::collections::HashMap;

fn headers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_build_plain_ok_response() {
    let shape = ResponseShape::new(HttpStatus::Ok);
    let spec = shape.build(json!({ "id": 1 }), HashMap::new()).unwrap();
    assert_eq!(spec.status, HttpStatus::Ok);
    assert_eq!(spec.body, json!({ "id": 1 }));
}

#[test]
fn test_no_content_rejects_body() {
    let shape = ResponseShape::new(HttpStatus::NoContent);
    let err = shape.build(json!({ "oops": true }), HashMap::new());
    assert!(matches!(err, Err(ResponseError::BodyCardinality { .. })));
    assert!(shape.build(Value::Null, HashMap::new()).is_ok());
}

#[test]
fn test_required_body_rejects_null() {
    let shape = ResponseShape::new(HttpStatus::Ok);
    let err = shape.build(Value::Null, HashMap::new());
    assert!(matches!(err, Err(ResponseError::BodyCardinality { .. })));
}

#[test]
fn test_created_requires_location_header() {
    let shape = ResponseShape::new(HttpStatus::Created);
    let err = shape.build(json!({ "id": 1 }), HashMap::new());
    assert!(matches!(
        err,
        Err(ResponseError::MissingHeader { header: "location", .. })
    ));
    let spec = shape
        .build(json!({ "id": 1 }), headers(&[("location", "/pets/1")]))
        .unwrap();
    assert_eq!(spec.headers.get("location"), Some(&"/pets/1".to_string()));
}

#[test]
fn test_body_schema_enforced() {
    let shape = ResponseShape::new(HttpStatus::Ok)
        .body_schema(&json!({
            "type": "object",
            "properties": { "id": { "type": "integer" } },
            "required": ["id"]
        }))
        .unwrap();
    assert!(shape.build(json!({ "id": 7 }), HashMap::new()).is_ok());
    let err = shape.build(json!({ "id": "seven" }), HashMap::new());
    assert!(matches!(err, Err(ResponseError::BodySchema(_))));
}

#[test]
fn test_header_schema_enforced() {
    let shape = ResponseShape::new(HttpStatus::Ok)
        .header_schema(&json!({
            "type": "object",
            "properties": { "etag": { "type": "string", "pattern": "^\"" } }
        }))
        .unwrap();
    assert!(shape
        .build(json!({}), headers(&[("etag", "\"abc\"")]))
        .is_ok());
    let err = shape.build(json!({}), headers(&[("etag", "abc")]));
    assert!(matches!(err, Err(ResponseError::HeaderSchema(_))));
}

#[test]
fn test_generators_dispatch_by_status() {
    let generators = ResponseGenerators::new()
        .with(ResponseShape::new(HttpStatus::Ok))
        .with(ResponseShape::new(HttpStatus::NotFound));

    assert!(generators.respond(HttpStatus::Ok, json!({ "ok": true })).is_ok());
    assert!(generators
        .respond(HttpStatus::NotFound, json!({ "missing": true }))
        .is_ok());

    let err = generators.respond(HttpStatus::Accepted, json!({}));
    assert!(matches!(err, Err(ResponseError::UndeclaredStatus(_))));
}

#[test]
fn test_optional_body_accepts_both() {
    let shape = ResponseShape::new(HttpStatus::Accepted);
    assert!(shape.build(Value::Null, HashMap::new()).is_ok());
    assert!(shape.build(json!({ "queued": true }), HashMap::new()).is_ok());
}
