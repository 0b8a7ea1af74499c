//! # Error Module
//!
//! The closed failure model for the request pipeline.
//!
//! Every way a request can fail is one of seven [`ErrorCode`]s, each mapped to
//! exactly one HTTP status. Pipeline steps surface failures as explicit
//! [`RequestError`] results (no panicking control flow); [`handle_error`] is
//! the single boundary that turns any failure, recognized or not, into a
//! well-formed error response, logging it once on the way out. A client never
//! sees an unhandled crash: unrecognized failures become
//! `500 {"name": "unknown", "message": ""}`.

mod core;

pub use core::{handle_error, ErrorCode, RequestError};
