//! Error types for configuration loading.
//!
//! Invariants:
//! - Every variant names the offending variable or setting.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Base URL is required. Set ESADMIN_BASE_URL or pass --base-url.")]
    MissingBaseUrl,

    #[error("Basic authentication requires both a username and a password")]
    IncompleteBasicAuth,

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },

    #[error("invalid max retries: {message}")]
    InvalidMaxRetries { message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// Only the byte index of the parse failure is kept, never the line.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file")]
    DotenvUnknown,
}
