//! # apivalve
//!
//! **apivalve** is a typed request-validation and response-normalization layer
//! for building HTTP API endpoints atop a web-application framework.
//!
//! ## Overview
//!
//! An endpoint is declared once: its method, path template, query/header/body
//! schemas, and the set of response shapes it may transmit, one per status
//! code. apivalve then wraps the handler so that every inbound request is
//! parsed and validated before the handler runs, and every outcome (success,
//! rejection, handler failure, even a panic) leaves as a well-formed,
//! transport-native response.
//!
//! The crate deliberately owns no transport: it rides atop whatever serves
//! requests, reading them through [`adapter::TxRequest`] and emitting
//! responses through [`adapter::TxAdapter`].
//!
//! ## Architecture
//!
//! - **[`registry`]** - static method/status descriptor tables (codes,
//!   categories, body cardinality, header requirements)
//! - **[`matcher`]** - path-template parsing and linear segment matching
//! - **[`schema`]** - the black-box validation capability and its
//!   JSON-Schema-backed implementation
//! - **[`pipeline`]** - endpoint declaration and the ordered validation and
//!   dispatch pipeline
//! - **[`response`]** - response specs and the per-status shape table handlers
//!   respond through
//! - **[`error`]** - the closed error-code registry and the single
//!   error-to-response boundary
//! - **[`adapter`]** - the transport boundary, with an `http`-crate adapter
//!   included
//! - **[`typed`]** - type-safe handler traits over validated request data
//! - **[`ids`]** - ULID request identifiers for log correlation
//! - **[`runtime_config`]** - environment-driven configuration
//!
//! ## Request Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Transport
//!     participant Pipeline as Endpoint::dispatch
//!     participant Matcher
//!     participant Validators
//!     participant Handler
//!     participant ErrorHandler as handle_error
//!     participant Adapter as TxAdapter
//!
//!     Transport->>Pipeline: TxRequest
//!     Pipeline->>Pipeline: method check
//!     Pipeline->>Matcher: match_path(template, path)
//!     Matcher-->>Pipeline: extracted params
//!     Pipeline->>Validators: path / headers / query / body
//!     alt any step fails
//!         Pipeline->>ErrorHandler: RequestError (specific code)
//!         ErrorHandler->>Adapter: error response spec
//!     else all steps pass
//!         Pipeline->>Handler: HandlerArgs {method, path, params, generators}
//!         Handler-->>Pipeline: ResponseSpec (via declared shapes)
//!         Pipeline->>Adapter: response spec
//!     end
//!     Adapter-->>Transport: transport-native response
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use apivalve::adapter::{HttpAdapter, ParsedRequest};
//! use apivalve::pipeline::Endpoint;
//! use apivalve::registry::{HttpMethod, HttpStatus};
//! use apivalve::response::ResponseShape;
//! use serde_json::json;
//! use std::collections::HashMap;
//!
//! # fn main() -> Result<(), apivalve::schema::SchemaError> {
//! let endpoint = Endpoint::new(HttpMethod::Get, "/pets/:id")
//!     .path_params_schema(&json!({
//!         "type": "object",
//!         "properties": { "id": { "type": "string" } },
//!         "required": ["id"],
//!     }))?
//!     .response(ResponseShape::new(HttpStatus::Ok));
//!
//! let request = ParsedRequest::new("GET", "/pets/42", HashMap::new(), None);
//! let response = endpoint.dispatch(&request, &HttpAdapter, |args| {
//!     let id = args.params.path_params["id"].clone();
//!     Ok(args.generators.respond(HttpStatus::Ok, json!({ "id": id }))?)
//! });
//! assert_eq!(response.status(), http::StatusCode::OK);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Behavior
//!
//! Every failure maps to one of seven closed error codes, each tied to a fixed
//! HTTP status; clients always receive `{"name": <code>, "message": <text>}`
//! with the registry's status. Anything unrecognized, a handler panic
//! included, becomes `500 {"name": "unknown", "message": ""}`. Errors are logged
//! exactly once, at the error-handler boundary, through `tracing`.

pub mod adapter;
pub mod error;
pub mod ids;
pub mod matcher;
pub mod pipeline;
pub mod registry;
pub mod response;
pub mod runtime_config;
pub mod schema;
pub mod typed;

pub use adapter::{HttpAdapter, ParsedRequest, TxAdapter, TxRequest};
pub use error::{handle_error, ErrorCode, RequestError};
pub use pipeline::{Endpoint, HandlerArgs, RequestParams};
pub use registry::{HttpMethod, HttpStatus};
pub use response::{ResponseGenerators, ResponseShape, ResponseSpec};
