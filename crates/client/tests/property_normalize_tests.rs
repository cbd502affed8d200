//! Property tests for settings normalization.
//!
//! Any settings document, encoded flat or nested, must answer every dotted
//! lookup identically.

use esadmin_client::normalize::{lookup, nest};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z_]{0,8}"
}

fn setting_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-z0-9]{1,6}".prop_map(Value::String),
        (0u32..100).prop_map(|n| Value::String(n.to_string())),
    ]
}

/// Dotted paths where no path is a prefix of another.
fn flat_settings() -> impl Strategy<Value = Vec<(String, Value)>> {
    prop::collection::btree_map(
        prop::collection::vec(segment(), 1..4).prop_map(|parts| parts.join(".")),
        setting_value(),
        1..8,
    )
    .prop_map(|map| {
        let keys: Vec<String> = map.keys().cloned().collect();
        map.into_iter()
            .filter(|(k, _)| {
                !keys
                    .iter()
                    .any(|other| other != k && other.starts_with(&format!("{}.", k)))
            })
            .map(|(k, v)| (format!("index.{}", k), v))
            .collect()
    })
}

proptest! {
    #[test]
    fn flat_and_nested_lookups_agree(entries in flat_settings()) {
        let flat: Map<String, Value> = entries.iter().cloned().collect();
        let flat = Value::Object(flat);
        let nested = nest(&flat);

        for (path, expected) in &entries {
            prop_assert_eq!(lookup(&flat, path), Some(expected));
            prop_assert_eq!(lookup(&nested, path), Some(expected));
        }
    }

    #[test]
    fn nest_is_idempotent(entries in flat_settings()) {
        let flat = Value::Object(entries.into_iter().collect());
        let once = nest(&flat);
        prop_assert_eq!(nest(&once), once.clone());
    }
}
