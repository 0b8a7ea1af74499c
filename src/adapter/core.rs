use crate::registry::status_descriptor;
use crate::response::ResponseSpec;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Raised by a transport body accessor when the body exists but cannot be
/// parsed into a JSON value.
#[derive(Debug, Clone, thiserror::Error)]
#[error("failed to parse request body: {0}")]
pub struct BodyParseError(pub String);

/// Read-only view over an inbound transport request.
///
/// The pipeline only ever reads through this trait; the transport keeps
/// ownership of its own request object.
pub trait TxRequest {
    /// Request method as a wire token (`"GET"`, ...). Compared case-sensitively
    /// against the declared method.
    fn method(&self) -> &str;

    /// Path portion of the URL, without the query string.
    fn path(&self) -> &str;

    /// Raw query string, without the leading `?`. Empty when absent.
    fn query(&self) -> &str;

    /// Header map with lower-cased keys, as delivered by the transport.
    fn headers(&self) -> &HashMap<String, String>;

    /// Body accessor: `Ok(None)` when absent, `Ok(Some(value))` when parsed,
    /// `Err` when present but unparseable. Only consulted when the endpoint
    /// declares a body.
    fn body(&self) -> Result<Option<Value>, BodyParseError>;
}

/// Outbound half of the transport boundary: converts a [`ResponseSpec`] into
/// the transport's native response representation.
///
/// Pure mapping. Implementations must not fail: the error handler runs
/// through the same adapter and has nowhere left to escalate to.
pub trait TxAdapter {
    type Response;

    fn adapt(&self, spec: &ResponseSpec) -> Self::Response;
}

/// Normalized response payload: the status's symbolic name, numeric code,
/// category, and the body under `data`.
#[must_use]
pub fn response_payload(spec: &ResponseSpec) -> Value {
    let desc = status_descriptor(spec.status);
    json!({
        "status": desc.name,
        "statusCode": desc.code,
        "statusType": desc.category.as_str(),
        "data": spec.body,
    })
}
