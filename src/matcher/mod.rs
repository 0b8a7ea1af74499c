//! # Matcher Module
//!
//! Path-template parsing and matching.
//!
//! A template is an ordered sequence of `/`-separated segments; a segment
//! starting with `:` names a parameter, anything else is a literal that must
//! match the request path textually at the same position. Matching is a single
//! linear pass: segment counts must agree, literals must be identical, and
//! each parameter segment captures the corresponding request segment.
//!
//! Templates are parsed once per declared endpoint and the parse result is
//! immutable; matching itself allocates at most one [`ParamVec`] per request.
//!
//! ## Example
//!
//! ```
//! use apivalve::matcher::match_path;
//!
//! let params = match_path("/projects/:project/documents/:document", "/projects/42/documents/99", "");
//! assert_eq!(params.as_slice(), &[
//!     ("project".to_string(), "42".to_string()),
//!     ("document".to_string(), "99".to_string()),
//! ]);
//!
//! // Missing segment: no match, empty result.
//! assert!(match_path("/projects/:project/documents/:document", "/projects/42", "").is_empty());
//! ```

mod core;

pub use core::{
    match_path, params_map, params_value, parse_template, ParamVec, PathSegment,
    MAX_INLINE_PARAMS, PARAM_MARKER,
};
