use serde_json::Value;

/// Boolean-discriminated outcome of a validation, optionally carrying the
/// (possibly coerced) validated data. Validators never fail in any other way.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    Valid(Value),
    Invalid,
}

impl Validation {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    /// The validated data, if validation succeeded.
    #[must_use]
    pub fn into_data(self) -> Option<Value> {
        match self {
            Validation::Valid(data) => Some(data),
            Validation::Invalid => None,
        }
    }
}

/// The externally supplied validator capability: a pure check over a JSON
/// value producing a success-or-failure verdict, never an exception.
pub trait Validate: Send + Sync {
    fn validate(&self, value: &Value) -> Validation;
}

/// Closures are validators; handy for tests and ad-hoc checks.
impl<F> Validate for F
where
    F: Fn(&Value) -> Validation + Send + Sync,
{
    fn validate(&self, value: &Value) -> Validation {
        self(value)
    }
}

/// Validator that accepts any value unchanged. The default for fields an
/// endpoint declares no schema for.
pub struct AnyValue;

impl Validate for AnyValue {
    fn validate(&self, value: &Value) -> Validation {
        Validation::Valid(value.clone())
    }
}

/// Raised when a declared JSON Schema cannot be compiled. This is an endpoint
/// construction error, not a request-time condition.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid schema: {0}")]
pub struct SchemaError(pub String);

/// JSON-Schema-backed validator. The schema is compiled once, at endpoint
/// construction; request-time validation is a read-only check.
pub struct SchemaValidator {
    compiled: jsonschema::Validator,
}

impl SchemaValidator {
    /// Compile a JSON Schema.
    pub fn new(schema: &Value) -> Result<Self, SchemaError> {
        let compiled =
            jsonschema::validator_for(schema).map_err(|e| SchemaError(e.to_string()))?;
        Ok(Self { compiled })
    }
}

impl Validate for SchemaValidator {
    fn validate(&self, value: &Value) -> Validation {
        if self.compiled.is_valid(value) {
            Validation::Valid(value.clone())
        } else {
            Validation::Invalid
        }
    }
}

/// Declared request-body schema.
///
/// `None` means the endpoint declares no body: the pipeline passes
/// `Value::Null` straight through without ever touching the transport body.
pub enum BodySchema {
    None,
    Schema(Box<dyn Validate>),
}

impl BodySchema {
    /// JSON-Schema-backed body schema.
    pub fn json_schema(schema: &Value) -> Result<Self, SchemaError> {
        Ok(BodySchema::Schema(Box::new(SchemaValidator::new(schema)?)))
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, BodySchema::None)
    }
}
