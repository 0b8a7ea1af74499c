use super::core::{BodyParseError, TxRequest};
use crate::error::{ErrorCode, RequestError};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Canonical [`TxRequest`] implementation: a request decomposed into the parts
/// the pipeline reads.
///
/// Header keys are lower-cased on construction. A non-empty body is parsed as
/// JSON eagerly; a parse failure is recorded and surfaced through the body
/// accessor only if the endpoint actually reads the body.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRequest {
    method: String,
    path: String,
    query: String,
    headers: HashMap<String, String>,
    body: Option<Value>,
    body_error: Option<String>,
}

impl ParsedRequest {
    /// Build from a method token, a `path?query` target, headers, and raw
    /// body bytes.
    #[must_use]
    pub fn new(
        method: impl Into<String>,
        target: &str,
        headers: HashMap<String, String>,
        body: Option<&[u8]>,
    ) -> Self {
        let (path, query) = match target.split_once('?') {
            Some((p, q)) => (p.to_string(), q.to_string()),
            None => (target.to_string(), String::new()),
        };
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();
        let (body, body_error) = parse_body(body);
        Self {
            method: method.into(),
            path,
            query,
            headers,
            body,
            body_error,
        }
    }

    /// Build from a full URL.
    ///
    /// A URL that cannot be interpreted yields
    /// [`ErrorCode::FailedToParseRequest`], ready for [`crate::error::handle_error`].
    pub fn from_url(
        method: impl Into<String>,
        url: &str,
        headers: HashMap<String, String>,
        body: Option<&[u8]>,
    ) -> Result<Self, RequestError> {
        let parsed = url::Url::parse(url).map_err(|e| {
            RequestError::new(
                ErrorCode::FailedToParseRequest,
                format!("unparseable request URL: {e}"),
            )
        })?;
        let target = match parsed.query() {
            Some(q) => format!("{}?{}", parsed.path(), q),
            None => parsed.path().to_string(),
        };
        Ok(Self::new(method, &target, headers, body))
    }

    /// Build from an `http` crate request. Header names arrive lower-cased
    /// from `http` already; values that are not valid UTF-8 are dropped.
    #[must_use]
    pub fn from_http<B: AsRef<[u8]>>(req: &http::Request<B>) -> Self {
        let headers: HashMap<String, String> = req
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let target = match req.uri().query() {
            Some(q) => format!("{}?{}", req.uri().path(), q),
            None => req.uri().path().to_string(),
        };
        let body = req.body().as_ref();
        let body = if body.is_empty() { None } else { Some(body) };
        Self::new(req.method().as_str(), &target, headers, body)
    }
}

fn parse_body(body: Option<&[u8]>) -> (Option<Value>, Option<String>) {
    match body {
        None => (None, None),
        Some(bytes) if bytes.is_empty() => (None, None),
        Some(bytes) => match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => {
                debug!(
                    body_fields = value.as_object().map(|o| o.len()),
                    "Request body parsed"
                );
                (Some(value), None)
            }
            Err(e) => {
                debug!(error = %e, "Request body parse failed");
                (None, Some(e.to_string()))
            }
        },
    }
}

impl TxRequest for ParsedRequest {
    fn method(&self) -> &str {
        &self.method
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn query(&self) -> &str {
        &self.query
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    fn body(&self) -> Result<Option<Value>, BodyParseError> {
        if let Some(err) = &self.body_error {
            return Err(BodyParseError(err.clone()));
        }
        Ok(self.body.clone())
    }
}
