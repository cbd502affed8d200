//! Configuration loader for `.env` files and environment variables.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration.
//! - Enforce the `DOTENV_DISABLED` gate so tests never pick up a stray `.env`.
//!
//! Invariants / Assumptions:
//! - Explicit builder overrides take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
