//! Aliases pointing at an index.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, Result};

/// The `aliases` entry of one index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexAliases {
    /// Alias name to alias metadata (often an empty object).
    #[serde(default)]
    pub aliases: BTreeMap<String, Value>,
}

/// Aliases keyed by index name: `{idx: {"aliases": {name: {...}}}}`.
///
/// Serializes back to exactly the shape it was read from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasSet(BTreeMap<String, IndexAliases>);

impl AliasSet {
    pub fn from_response(body: Value) -> Result<Self> {
        serde_json::from_value(body)
            .map_err(|e| ClientError::MalformedResponse(format!("aliases response: {}", e)))
    }

    pub fn get(&self, index: &str) -> Option<&IndexAliases> {
        self.0.get(index)
    }

    pub fn indices(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Alias names attached to `index`, sorted.
    pub fn alias_names(&self, index: &str) -> Vec<&str> {
        self.get(index)
            .map(|entry| entry.aliases.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn contains(&self, index: &str, alias: &str) -> bool {
        self.get(index)
            .is_some_and(|entry| entry.aliases.contains_key(alias))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, IndexAliases> {
        self.0
    }
}
