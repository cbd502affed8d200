//! Serde helpers for counters the server encodes inconsistently.
//!
//! Shard counts and token offsets are JSON numbers on current servers, but
//! some proxies and older releases render them as strings. Both decode to the
//! same integer here.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum U64OrString {
    U64(u64),
    I64(i64),
    String(String),
}

impl U64OrString {
    fn into_u64<E: serde::de::Error>(self) -> Result<u64, E> {
        match self {
            U64OrString::U64(v) => Ok(v),
            U64OrString::I64(v) => u64::try_from(v).map_err(E::custom),
            U64OrString::String(s) => s.trim().parse::<u64>().map_err(E::custom),
        }
    }
}

pub fn u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    U64OrString::deserialize(deserializer)?.into_u64()
}

/// Render a scalar setting the way the server reports it: settings values
/// come back as strings, even when they were written as numbers or booleans.
pub fn scalar_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Counts {
        #[serde(deserialize_with = "u64_from_string_or_number")]
        total: u64,
        #[serde(deserialize_with = "u64_from_string_or_number")]
        failed: u64,
    }

    #[test]
    fn test_number_and_string_decode_alike() {
        let a: Counts = serde_json::from_value(json!({"total": 5, "failed": 0})).unwrap();
        let b: Counts = serde_json::from_value(json!({"total": "5", "failed": "0"})).unwrap();
        assert_eq!(a.total, b.total);
        assert_eq!(a.failed, b.failed);
    }

    #[test]
    fn test_negative_is_rejected() {
        let result: Result<Counts, _> = serde_json::from_value(json!({"total": -1}));
        assert!(result.is_err());
    }

    #[test]
    fn test_scalar_to_string() {
        assert_eq!(scalar_to_string(&json!("3")), Some("3".to_string()));
        assert_eq!(scalar_to_string(&json!(3)), Some("3".to_string()));
        assert_eq!(scalar_to_string(&json!(true)), Some("true".to_string()));
        assert_eq!(scalar_to_string(&json!({"a": 1})), None);
    }
}
