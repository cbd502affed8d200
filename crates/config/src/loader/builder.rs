//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that merges `.env`, environment
//!   variables and explicit overrides.
//! - Validate and build the final `Config`.
//!
//! Does NOT handle:
//! - Environment variable parsing details (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Later calls win: `from_env()` followed by `with_*` lets CLI flags override env.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS, MAX_MAX_RETRIES, MAX_TIMEOUT_SECS};
use crate::types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    api_key: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    max_retries: Option<usize>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DotenvParse` for invalid syntax and
    /// `ConfigError::DotenvIo` for read failures. A missing file is not an error.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the basic-auth username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the basic-auth password.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: String) -> Self {
        self.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = self
            .base_url
            .as_deref()
            .map(validate_and_normalize_base_url)
            .transpose()?
            .ok_or(ConfigError::MissingBaseUrl)?;

        // API key takes precedence over basic auth.
        let strategy = match (self.api_key, self.username, self.password) {
            (Some(key), _, _) => AuthStrategy::ApiKey { key },
            (None, Some(username), Some(password)) => AuthStrategy::Basic { username, password },
            (None, None, None) => AuthStrategy::Anonymous,
            _ => return Err(ConfigError::IncompleteBasicAuth),
        };

        let connection = ConnectionConfig {
            base_url,
            skip_verify: self.skip_verify.unwrap_or(false),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
        };

        Self::validate_connection(&connection)?;

        Ok(Config {
            connection,
            auth: AuthConfig { strategy },
        })
    }

    /// Checks timeout and retry bounds.
    fn validate_connection(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        if connection.max_retries > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!(
                    "must be between 0 and {} (got {})",
                    MAX_MAX_RETRIES, connection.max_retries
                ),
            });
        }

        Ok(())
    }

    // Internal setters for use by env.rs

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_api_key(&mut self, key: Option<SecretString>) {
        self.api_key = key;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_max_retries(&mut self, retries: Option<usize>) {
        self.max_retries = retries;
    }
}

/// Validate that a base URL is an absolute http(s) URL with a host, and strip
/// trailing slashes.
pub(crate) fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "base_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. http://localhost:9200): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: format!(
                "scheme must be http or https (e.g. http://localhost:9200), got: {scheme}"
            ),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: "host is required (e.g. http://localhost:9200)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
