//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read `ESADMIN_*` variables and apply them to a `ConfigLoader`.
//!
//! Invariants:
//! - Empty or whitespace-only variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid numeric or boolean values return `ConfigError::InvalidValue`.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_API_KEY, ENV_BASE_URL, ENV_MAX_RETRIES, ENV_PASSWORD, ENV_SKIP_VERIFY, ENV_TIMEOUT,
    ENV_USERNAME, MAX_MAX_RETRIES,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse a boolean flag the way shells usually spell it.
pub(crate) fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_BASE_URL) {
        loader.set_base_url(Some(url));
    }
    if let Some(username) = env_var_or_none(ENV_USERNAME) {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none(ENV_PASSWORD) {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(key) = env_var_or_none(ENV_API_KEY) {
        loader.set_api_key(Some(SecretString::new(key.into())));
    }
    if let Some(skip) = env_var_or_none(ENV_SKIP_VERIFY) {
        loader.set_skip_verify(Some(parse_bool(ENV_SKIP_VERIFY, &skip)?));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) = env_var_or_none(ENV_MAX_RETRIES) {
        let value: usize = retries.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_MAX_RETRIES.to_string(),
            message: "must be a non-negative integer".to_string(),
        })?;
        if value > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!("must be between 0 and {} (got {})", MAX_MAX_RETRIES, value),
            });
        }
        loader.set_max_retries(Some(value));
    }
    Ok(())
}
