//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeout, retries).
//! - Define the top-level `Config` combining connection and auth.
//!
//! Does NOT handle:
//! - Loading from env or `.env` files (see `loader`).
//! - Actual network connections (see the client crate).
//!
//! Invariants:
//! - Duration fields are serialized as whole seconds.
//! - `Config::default()` points at an unauthenticated local node.

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::{AuthConfig, AuthStrategy};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for a cluster node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the node's HTTP API (e.g., http://localhost:9200)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Maximum number of retries for throttled or unavailable responses
    pub max_retries: usize,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Main configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config for an unauthenticated node at `base_url`.
    pub fn anonymous(base_url: String) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..ConnectionConfig::default()
            },
            auth: AuthConfig::default(),
        }
    }

    /// Create a config using HTTP basic authentication.
    pub fn with_basic_auth(base_url: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..ConnectionConfig::default()
            },
            auth: AuthConfig {
                strategy: AuthStrategy::Basic { username, password },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_serializes_as_seconds() {
        let config = Config::anonymous("http://localhost:9200".to_string());
        let json = serde_json::to_value(&config.connection).unwrap();
        assert_eq!(json["timeout"], DEFAULT_TIMEOUT_SECS);

        let back: ConnectionConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_default_is_anonymous_localhost() {
        let config = Config::default();
        assert_eq!(config.connection.base_url, DEFAULT_BASE_URL);
        assert!(matches!(config.auth.strategy, AuthStrategy::Anonymous));
    }
}
