//! # Runtime Configuration Module
//!
//! Environment-variable configuration for behavior that belongs to the
//! deployment rather than the endpoint declaration.
//!
//! ## Environment Variables
//!
//! ### `APIVALVE_BASE_PATH`
//!
//! The transport path prefix stripped from request paths before template
//! matching. Hosting frameworks commonly mount API handlers under a fixed
//! prefix (`/api`); endpoints declare templates without it.
//!
//! Default: `/api`. Set to an empty string to disable stripping.
//!
//! ## Usage
//!
//! ```
//! use apivalve::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! assert!(config.base_path.is_empty() || config.base_path.starts_with('/'));
//! ```

use std::env;

/// Environment variable naming the transport path prefix.
pub const ENV_BASE_PATH: &str = "APIVALVE_BASE_PATH";

/// Prefix assumed when the environment does not say otherwise.
pub const DEFAULT_BASE_PATH: &str = "/api";

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Transport path prefix stripped before template matching.
    pub base_path: String,
}

impl RuntimeConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        let base_path =
            env::var(ENV_BASE_PATH).unwrap_or_else(|_| DEFAULT_BASE_PATH.to_string());
        RuntimeConfig { base_path }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }
}
