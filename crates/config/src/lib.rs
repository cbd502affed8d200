//! Connection configuration for the esadmin workspace.
//!
//! This crate provides types and a loader for the settings needed to reach a
//! search cluster's HTTP API: base URL, credentials, timeouts and retries.
//! Values come from a `.env` file, environment variables, and explicit
//! overrides, in increasing order of precedence.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};
