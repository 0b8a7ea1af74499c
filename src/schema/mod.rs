//! # Schema Module
//!
//! The validation capability the pipeline runs requests through.
//!
//! Validation is deliberately a black box: anything implementing [`Validate`]
//! produces a boolean-discriminated [`Validation`] verdict, never an error of
//! its own. The crate ships a JSON-Schema-backed implementation
//! ([`SchemaValidator`], compiled once at endpoint construction), an
//! accept-anything default ([`AnyValue`]), and a blanket impl for closures so
//! tests can instrument exactly when a validator runs.

mod core;

pub use core::{AnyValue, BodySchema, SchemaError, SchemaValidator, Validate, Validation};
