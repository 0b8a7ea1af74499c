use super::core::{response_payload, TxAdapter};
use crate::registry::status_descriptor;
use crate::response::ResponseSpec;
use http::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use http::StatusCode;
use serde_json::Value;
use tracing::warn;

/// Adapter producing `http::Response<serde_json::Value>`.
///
/// The response body is the normalized payload
/// (`{status, statusCode, statusType, data}`), the status line comes from the
/// registry, and the spec's headers are copied onto the response. Header
/// names/values the `http` crate rejects are skipped with a warning rather
/// than aborting; the adapter also serves the error path and must always
/// produce a response.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpAdapter;

impl TxAdapter for HttpAdapter {
    type Response = http::Response<Value>;

    fn adapt(&self, spec: &ResponseSpec) -> Self::Response {
        let desc = status_descriptor(spec.status);
        let mut response = http::Response::new(response_payload(spec));
        *response.status_mut() =
            StatusCode::from_u16(desc.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in &spec.headers {
            match (
                HeaderName::try_from(name.as_str()),
                HeaderValue::try_from(value.as_str()),
            ) {
                (Ok(n), Ok(v)) => {
                    response.headers_mut().insert(n, v);
                }
                _ => {
                    warn!(header = %name, "Skipping response header the transport cannot represent");
                }
            }
        }
        response
    }
}
