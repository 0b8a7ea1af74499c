use crate::adapter::{TxAdapter, TxRequest};
use crate::error::{handle_error, ErrorCode, RequestError};
use crate::ids::RequestId;
use crate::matcher::{match_path, params_map, params_value};
use crate::registry::{method_descriptor, BodyCardinality, HttpMethod};
use crate::response::{ResponseGenerators, ResponseShape, ResponseSpec};
use crate::runtime_config::RuntimeConfig;
use crate::schema::{AnyValue, BodySchema, SchemaError, SchemaValidator, Validate};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, info};

use super::query::parse_query;

/// Validated request data, assembled once per request after every pipeline
/// step has passed. Passed to the handler by value; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct RequestParams {
    /// Extracted path parameters (bare names, values as matched).
    pub path_params: HashMap<String, String>,
    /// Validated query object (nested, as returned by the query validator).
    pub query_params: Value,
    /// Request headers as delivered by the transport (lower-cased keys).
    pub headers: HashMap<String, String>,
    /// Validated body, `Value::Null` when the endpoint declares no body or an
    /// optional body was absent.
    pub body: Value,
}

/// Arguments passed to a handler once validation succeeds.
pub struct HandlerArgs<'a> {
    pub method: HttpMethod,
    /// Concrete request path (not the template).
    pub path: String,
    pub params: RequestParams,
    /// The endpoint's declared response shapes, forwarded unchanged.
    pub generators: &'a ResponseGenerators,
}

/// A declared API endpoint: method, path template, request validators, and
/// the permitted response shapes. Built once, immutable afterwards, safe to
/// share across threads.
///
/// # Example
///
/// ```
/// use apivalve::pipeline::Endpoint;
/// use apivalve::registry::{HttpMethod, HttpStatus};
/// use apivalve::response::ResponseShape;
/// use serde_json::json;
///
/// # fn main() -> Result<(), apivalve::schema::SchemaError> {
/// let endpoint = Endpoint::new(HttpMethod::Get, "/pets/:id")
///     .path_params_schema(&json!({
///         "type": "object",
///         "properties": { "id": { "type": "string" } },
///         "required": ["id"],
///     }))?
///     .response(ResponseShape::new(HttpStatus::Ok));
/// # let _ = endpoint;
/// # Ok(())
/// # }
/// ```
pub struct Endpoint {
    method: HttpMethod,
    path: String,
    base_path: String,
    path_params: Box<dyn Validate>,
    query_params: Box<dyn Validate>,
    headers: Box<dyn Validate>,
    body: BodySchema,
    body_required: bool,
    generators: ResponseGenerators,
}

impl Endpoint {
    /// Declare an endpoint for `method` at `path`.
    ///
    /// Field validators default to accept-anything; the body declaration
    /// defaults from the method descriptor (no body for GET/DELETE/HEAD/
    /// OPTIONS, required body for POST/PUT/PATCH). The transport path prefix
    /// defaults from [`RuntimeConfig`].
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        let desc = method_descriptor(method);
        let body = match desc.body {
            BodyCardinality::Never => BodySchema::None,
            _ => BodySchema::Schema(Box::new(AnyValue)),
        };
        Self {
            method,
            path: path.into(),
            base_path: RuntimeConfig::from_env().base_path,
            path_params: Box::new(AnyValue),
            query_params: Box::new(AnyValue),
            headers: Box::new(AnyValue),
            body,
            body_required: desc.body == BodyCardinality::Required,
            generators: ResponseGenerators::new(),
        }
    }

    /// Override the transport path prefix stripped before matching.
    #[must_use]
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Validate extracted path parameters with a JSON Schema.
    pub fn path_params_schema(mut self, schema: &Value) -> Result<Self, SchemaError> {
        self.path_params = Box::new(SchemaValidator::new(schema)?);
        Ok(self)
    }

    /// Validate extracted path parameters with an arbitrary validator.
    #[must_use]
    pub fn path_params_validator(mut self, validator: Box<dyn Validate>) -> Self {
        self.path_params = validator;
        self
    }

    /// Validate the parsed query object with a JSON Schema.
    pub fn query_schema(mut self, schema: &Value) -> Result<Self, SchemaError> {
        self.query_params = Box::new(SchemaValidator::new(schema)?);
        Ok(self)
    }

    /// Validate the parsed query object with an arbitrary validator.
    #[must_use]
    pub fn query_validator(mut self, validator: Box<dyn Validate>) -> Self {
        self.query_params = validator;
        self
    }

    /// Validate the request headers with a JSON Schema.
    pub fn header_schema(mut self, schema: &Value) -> Result<Self, SchemaError> {
        self.headers = Box::new(SchemaValidator::new(schema)?);
        Ok(self)
    }

    /// Validate the request headers with an arbitrary validator.
    #[must_use]
    pub fn header_validator(mut self, validator: Box<dyn Validate>) -> Self {
        self.headers = validator;
        self
    }

    /// Declare and validate the request body with a JSON Schema. Whether the
    /// body may be absent still follows the method's cardinality unless
    /// overridden with [`Endpoint::require_body`].
    pub fn body_schema(mut self, schema: &Value) -> Result<Self, SchemaError> {
        self.body = BodySchema::json_schema(schema)?;
        Ok(self)
    }

    /// Declare and validate the request body with an arbitrary validator.
    #[must_use]
    pub fn body_validator(mut self, validator: Box<dyn Validate>) -> Self {
        self.body = BodySchema::Schema(validator);
        self
    }

    /// Declare that this endpoint has no body: the transport body is never
    /// read and handlers see `Value::Null`.
    #[must_use]
    pub fn no_body(mut self) -> Self {
        self.body = BodySchema::None;
        self.body_required = false;
        self
    }

    /// Override the body-cardinality hint: whether an absent body is rejected.
    #[must_use]
    pub fn require_body(mut self, required: bool) -> Self {
        self.body_required = required;
        self
    }

    /// Permit a response shape. Handlers can only respond through shapes
    /// declared here.
    #[must_use]
    pub fn response(mut self, shape: ResponseShape) -> Self {
        self.generators = self.generators.with(shape);
        self
    }

    #[must_use]
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// The declared path template.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn generators(&self) -> &ResponseGenerators {
        &self.generators
    }

    /// Run the five validation steps against a request, in order, first
    /// failure wins:
    ///
    /// 1. method check (`invalid-method`)
    /// 2. path match + path-param validation (`invalid-path-params`)
    /// 3. header validation (`invalid-headers`)
    /// 4. query parsing + validation (`invalid-query-params`)
    /// 5. body read + validation (`invalid-body`)
    ///
    /// On success returns the assembled [`RequestParams`].
    pub fn validate_request(&self, req: &dyn TxRequest) -> Result<RequestParams, RequestError> {
        // 1. Method: exact, case-sensitive comparison against the wire token.
        if req.method() != self.method.as_str() {
            return Err(RequestError::new(
                ErrorCode::InvalidMethod,
                format!("expected {}, got {}", self.method, req.method()),
            ));
        }

        // 2. Path. An empty extraction can mean "no match" as well as
        // "matched, zero parameters declared"; the schema check below is what
        // tells them apart, so it always runs.
        let raw_params = match_path(&self.path, req.path(), &self.base_path);
        let params_json = params_value(&raw_params);
        if !self.path_params.validate(&params_json).is_valid() {
            return Err(RequestError::new(
                ErrorCode::InvalidPathParams,
                format!("path does not match {}", self.path),
            ));
        }

        // 3. Headers, as delivered (lower-cased keys).
        if !self.headers.validate(&headers_value(req.headers())).is_valid() {
            return Err(RequestError::new(
                ErrorCode::InvalidHeaders,
                "request headers failed validation",
            ));
        }

        // 4. Query string, parsed into a nested object first.
        let query = parse_query(req.query());
        let query = self
            .query_params
            .validate(&query)
            .into_data()
            .ok_or_else(|| {
                RequestError::new(
                    ErrorCode::InvalidQueryParams,
                    "query parameters failed validation",
                )
            })?;

        // 5. Body.
        let body = self.validate_body(req)?;

        Ok(RequestParams {
            path_params: params_map(&raw_params),
            query_params: query,
            headers: req.headers().clone(),
            body,
        })
    }

    fn validate_body(&self, req: &dyn TxRequest) -> Result<Value, RequestError> {
        let validator = match &self.body {
            // No body declared: the transport body is never read.
            BodySchema::None => return Ok(Value::Null),
            BodySchema::Schema(validator) => validator,
        };
        let raw = req
            .body()
            .map_err(|e| RequestError::new(ErrorCode::InvalidBody, e.to_string()))?;
        if raw.is_none() && self.body_required {
            return Err(RequestError::new(
                ErrorCode::InvalidBody,
                "request body required",
            ));
        }
        let raw = raw.unwrap_or(Value::Null);
        validator.validate(&raw).into_data().ok_or_else(|| {
            RequestError::new(ErrorCode::InvalidBody, "request body failed validation")
        })
    }

    /// Validate, invoke the handler, and normalize the outcome through
    /// `adapter`. Always produces a transport response: any failure, even a
    /// handler panic, is routed through [`handle_error`].
    pub fn dispatch<A, F>(&self, req: &dyn TxRequest, adapter: &A, handler: F) -> A::Response
    where
        A: TxAdapter,
        F: FnOnce(HandlerArgs<'_>) -> anyhow::Result<ResponseSpec>,
    {
        let request_id =
            RequestId::from_header_or_new(req.headers().get("x-request-id").map(String::as_str));
        debug!(
            request_id = %request_id,
            method = %req.method(),
            path = %req.path(),
            "Request received"
        );
        match self.run(req, &request_id, handler) {
            Ok(spec) => {
                info!(
                    request_id = %request_id,
                    status = spec.status.code(),
                    "Request completed"
                );
                adapter.adapt(&spec)
            }
            Err(err) => handle_error(&err, adapter),
        }
    }

    fn run<F>(
        &self,
        req: &dyn TxRequest,
        request_id: &RequestId,
        handler: F,
    ) -> anyhow::Result<ResponseSpec>
    where
        F: FnOnce(HandlerArgs<'_>) -> anyhow::Result<ResponseSpec>,
    {
        let params = self.validate_request(req)?;
        info!(
            request_id = %request_id,
            method = %self.method,
            path = %self.path,
            "Request validated"
        );
        let args = HandlerArgs {
            method: self.method,
            path: req.path().to_string(),
            params,
            generators: &self.generators,
        };
        match catch_unwind(AssertUnwindSafe(|| handler(args))) {
            Ok(result) => result,
            Err(panic) => Err(anyhow::anyhow!(
                "handler panicked: {}",
                panic_message(panic.as_ref())
            )),
        }
    }
}

fn headers_value(headers: &HashMap<String, String>) -> Value {
    let map: Map<String, Value> = headers
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();
    Value::Object(map)
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "opaque panic payload".to_string()
    }
}
