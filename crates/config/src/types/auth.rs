//! Authentication types for cluster connections.
//!
//! Responsibilities:
//! - Define the supported authentication strategies (none, basic, API key).
//! - Keep secret values wrapped in `secrecy::SecretString`.
//!
//! Does NOT handle:
//! - Attaching credentials to requests (see the client crate's HTTP transport).
//!
//! Invariants:
//! - Secrets are never printed by `Debug`; `SecretString` redacts them.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Strategy for authenticating with the cluster.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AuthStrategy {
    /// Unauthenticated access.
    #[default]
    #[serde(rename = "none")]
    Anonymous,
    /// HTTP basic authentication.
    #[serde(rename = "basic")]
    Basic {
        username: String,
        #[serde(with = "secret_string")]
        password: SecretString,
    },
    /// `Authorization: ApiKey <key>` header.
    #[serde(rename = "api_key")]
    ApiKey {
        #[serde(with = "secret_string")]
        key: SecretString,
    },
}

/// Authentication configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// The authentication strategy to use.
    #[serde(flatten)]
    pub strategy: AuthStrategy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_basic_auth_round_trips_through_json() {
        let auth = AuthConfig {
            strategy: AuthStrategy::Basic {
                username: "elastic".to_string(),
                password: SecretString::new("changeme".to_string().into()),
            },
        };

        let json = serde_json::to_value(&auth).unwrap();
        assert_eq!(json["type"], "basic");
        assert_eq!(json["username"], "elastic");

        let back: AuthConfig = serde_json::from_value(json).unwrap();
        match back.strategy {
            AuthStrategy::Basic { username, password } => {
                assert_eq!(username, "elastic");
                assert_eq!(password.expose_secret(), "changeme");
            }
            other => panic!("unexpected strategy: {other:?}"),
        }
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let strategy = AuthStrategy::ApiKey {
            key: SecretString::new("super-secret".to_string().into()),
        };
        assert!(!format!("{strategy:?}").contains("super-secret"));
    }
}
