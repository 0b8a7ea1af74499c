use crate::adapter::TxAdapter;
use crate::registry::HttpStatus;
use crate::response::ResponseSpec;
use serde_json::json;
use std::collections::HashMap;
use tracing::error;

/// Closed registry of request-failure codes. Each code maps to exactly one
/// HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Unknown,
    InvalidMethod,
    InvalidQueryParams,
    InvalidPathParams,
    InvalidHeaders,
    InvalidBody,
    FailedToParseRequest,
}

impl ErrorCode {
    /// All codes, for exhaustive tests over the registry.
    pub const ALL: [ErrorCode; 7] = [
        ErrorCode::Unknown,
        ErrorCode::InvalidMethod,
        ErrorCode::InvalidQueryParams,
        ErrorCode::InvalidPathParams,
        ErrorCode::InvalidHeaders,
        ErrorCode::InvalidBody,
        ErrorCode::FailedToParseRequest,
    ];

    /// Wire name, as sent in error response bodies.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::Unknown => "unknown",
            ErrorCode::InvalidMethod => "invalid-method",
            ErrorCode::InvalidQueryParams => "invalid-query-params",
            ErrorCode::InvalidPathParams => "invalid-path-params",
            ErrorCode::InvalidHeaders => "invalid-headers",
            ErrorCode::InvalidBody => "invalid-body",
            ErrorCode::FailedToParseRequest => "failed-to-parse-request",
        }
    }

    /// The HTTP status this code maps to.
    #[must_use]
    pub fn status(&self) -> HttpStatus {
        match self {
            ErrorCode::Unknown => HttpStatus::InternalServerError,
            ErrorCode::InvalidBody => HttpStatus::UnprocessableEntity,
            ErrorCode::InvalidMethod
            | ErrorCode::InvalidQueryParams
            | ErrorCode::InvalidPathParams
            | ErrorCode::InvalidHeaders
            | ErrorCode::FailedToParseRequest => HttpStatus::BadRequest,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A request failure: a code from the closed registry, a message, and any
/// headers the error response should carry.
///
/// Created by a pipeline step or a handler; consumed once by [`handle_error`]
/// to build the error response.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{code}: {message}")]
pub struct RequestError {
    pub code: ErrorCode,
    pub message: String,
    pub headers: HashMap<String, String>,
}

impl RequestError {
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            headers: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Convert to the response spec this error transmits: the code's status,
    /// the error's headers, and a `{name, message}` body.
    #[must_use]
    pub fn to_response_spec(&self) -> ResponseSpec {
        ResponseSpec {
            status: self.code.status(),
            headers: self.headers.clone(),
            body: json!({
                "name": self.code.name(),
                "message": self.message,
            }),
        }
    }
}

/// Translate any failure into a transport response.
///
/// The single place where "anything that went wrong" becomes a well-formed
/// response: a downcastable [`RequestError`] transmits its own spec, anything
/// else is folded into [`ErrorCode::Unknown`] with an empty message. Logs the
/// failure exactly once. Never panics.
pub fn handle_error<A: TxAdapter>(err: &anyhow::Error, adapter: &A) -> A::Response {
    match err.downcast_ref::<RequestError>() {
        Some(req_err) => {
            error!(
                code = req_err.code.name(),
                status = req_err.code.status().code(),
                message = %req_err.message,
                "Request failed"
            );
            adapter.adapt(&req_err.to_response_spec())
        }
        None => {
            error!(error = %err, "Unrecognized failure, responding with internal error");
            adapter.adapt(&RequestError::new(ErrorCode::Unknown, "").to_response_spec())
        }
    }
}
