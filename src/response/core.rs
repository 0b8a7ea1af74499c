use crate::registry::{status_descriptor, BodyCardinality, HttpStatus};
use crate::schema::{SchemaError, SchemaValidator, Validate};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// The status/headers/body triple a handler produces, prior to
/// transport-specific conversion. `Value::Null` as body means "no body".
///
/// Consumed exactly once, by a transport adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSpec {
    pub status: HttpStatus,
    pub headers: HashMap<String, String>,
    pub body: Value,
}

impl ResponseSpec {
    /// Bare spec with no headers.
    #[must_use]
    pub fn new(status: HttpStatus, body: Value) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body,
        }
    }
}

/// Why a response could not be built from the declared shape.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResponseError {
    #[error("no response shape declared for status {0}")]
    UndeclaredStatus(HttpStatus),
    #[error("status {status} declares body cardinality {cardinality:?}, got {got}")]
    BodyCardinality {
        status: HttpStatus,
        cardinality: BodyCardinality,
        got: &'static str,
    },
    #[error("status {status} requires response header '{header}'")]
    MissingHeader { status: HttpStatus, header: &'static str },
    #[error("response headers for status {0} failed schema validation")]
    HeaderSchema(HttpStatus),
    #[error("response body for status {0} failed schema validation")]
    BodySchema(HttpStatus),
}

/// One permitted response shape: a status plus optional schemas constraining
/// the body and headers a handler may attach to it.
pub struct ResponseShape {
    status: HttpStatus,
    body: Option<SchemaValidator>,
    headers: Option<SchemaValidator>,
}

impl ResponseShape {
    /// Declare a shape for `status` with no schema constraints beyond the
    /// status's own cardinality and required headers.
    #[must_use]
    pub fn new(status: HttpStatus) -> Self {
        Self {
            status,
            body: None,
            headers: None,
        }
    }

    /// Constrain the body with a JSON Schema (compiled here, once).
    pub fn body_schema(mut self, schema: &Value) -> Result<Self, SchemaError> {
        self.body = Some(SchemaValidator::new(schema)?);
        Ok(self)
    }

    /// Constrain the headers with a JSON Schema (compiled here, once).
    pub fn header_schema(mut self, schema: &Value) -> Result<Self, SchemaError> {
        self.headers = Some(SchemaValidator::new(schema)?);
        Ok(self)
    }

    #[must_use]
    pub fn status(&self) -> HttpStatus {
        self.status
    }

    /// Build a [`ResponseSpec`], enforcing in order: body cardinality for the
    /// status, required headers from the status descriptor, the header schema,
    /// and the body schema.
    pub fn build(
        &self,
        body: Value,
        headers: HashMap<String, String>,
    ) -> Result<ResponseSpec, ResponseError> {
        let desc = status_descriptor(self.status);

        match (desc.body, body.is_null()) {
            (BodyCardinality::Never, false) => {
                return Err(ResponseError::BodyCardinality {
                    status: self.status,
                    cardinality: desc.body,
                    got: "a body",
                })
            }
            (BodyCardinality::Required, true) => {
                return Err(ResponseError::BodyCardinality {
                    status: self.status,
                    cardinality: desc.body,
                    got: "no body",
                })
            }
            _ => {}
        }

        for header in desc.required_headers {
            if !headers.contains_key(*header) {
                return Err(ResponseError::MissingHeader {
                    status: self.status,
                    header,
                });
            }
        }

        if let Some(schema) = &self.headers {
            let map: Map<String, Value> = headers
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect();
            if !schema.validate(&Value::Object(map)).is_valid() {
                return Err(ResponseError::HeaderSchema(self.status));
            }
        }

        if let Some(schema) = &self.body {
            if !schema.validate(&body).is_valid() {
                return Err(ResponseError::BodySchema(self.status));
            }
        }

        Ok(ResponseSpec {
            status: self.status,
            headers,
            body,
        })
    }
}

/// Dispatch table of the response shapes an endpoint permits, keyed by status.
///
/// Forwarded unchanged to handlers, which build every response through it.
#[derive(Default)]
pub struct ResponseGenerators {
    shapes: HashMap<HttpStatus, ResponseShape>,
}

impl ResponseGenerators {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a permitted shape. A later shape for the same status replaces the
    /// earlier one.
    #[must_use]
    pub fn with(mut self, shape: ResponseShape) -> Self {
        self.shapes.insert(shape.status, shape);
        self
    }

    /// The declared shape for a status, if any.
    #[must_use]
    pub fn shape(&self, status: HttpStatus) -> Option<&ResponseShape> {
        self.shapes.get(&status)
    }

    /// Build a headerless response through the declared shape for `status`.
    pub fn respond(&self, status: HttpStatus, body: Value) -> Result<ResponseSpec, ResponseError> {
        self.respond_with_headers(status, body, HashMap::new())
    }

    /// Build a response through the declared shape for `status`.
    pub fn respond_with_headers(
        &self,
        status: HttpStatus,
        body: Value,
        headers: HashMap<String, String>,
    ) -> Result<ResponseSpec, ResponseError> {
        let shape = self
            .shapes
            .get(&status)
            .ok_or(ResponseError::UndeclaredStatus(status))?;
        shape.build(body, headers)
    }
}
