//! # Typed Module
//!
//! Type-safe request/response handling on top of the pipeline.
//!
//! Where the plain pipeline hands handlers raw `serde_json::Value`s, a typed
//! [`Handler`] declares a concrete `Request` type converted from the validated
//! params via `TryFrom` (use [`from_body`] for the common body-only case) and
//! a concrete `Response` type serialized back through the endpoint's declared
//! response shape. The conversion runs after validation, so a failure there
//! means the request parsed but does not fit the declared types, reported as
//! `failed-to-parse-request`.

mod core;

pub use core::{from_body, Handler, TypedHandlerRequest};
