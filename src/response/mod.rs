//! # Response Module
//!
//! Response specs and the per-endpoint table of permitted response shapes.
//!
//! A handler never assembles a transport response directly: it builds a
//! [`ResponseSpec`] through the [`ResponseGenerators`] table its endpoint
//! declared, one [`ResponseShape`] per permitted status. Each shape carries
//! its own optional body/header schemas, and building enforces the status's
//! body cardinality and required headers from the registry, so a `201` without
//! a `location` header or a `204` with a body is rejected before it can reach
//! the wire.

mod core;
#[cfg(test)]
mod tests;

pub use core::{ResponseError, ResponseGenerators, ResponseShape, ResponseSpec};
