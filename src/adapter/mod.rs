//! # Adapter Module
//!
//! The transport boundary, in both directions.
//!
//! Inbound, the pipeline reads requests through [`TxRequest`]: method token,
//! path, raw query string, lower-cased headers, and a body accessor that is
//! only consulted when the endpoint declares a body. [`ParsedRequest`] is the
//! canonical implementation, with constructors from raw parts, from a full
//! URL, and from an `http::Request`.
//!
//! Outbound, [`TxAdapter`] converts a response spec into whatever the hosting
//! framework transmits. [`HttpAdapter`] targets `http::Response<Value>` and
//! carries the normalized payload built by [`response_payload`]. Writing an
//! adapter for another framework is a single method.

mod core;
mod http_adapter;
mod request;
#[cfg(test)]
mod tests;

pub use core::{response_payload, BodyParseError, TxAdapter, TxRequest};
pub use http_adapter::HttpAdapter;
pub use request::ParsedRequest;
