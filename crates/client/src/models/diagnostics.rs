//! Stats, status and segments documents.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::normalize::indices_section;

/// A raw per-index diagnostic document (`_stats`, `_status`, `_segments`).
///
/// The body is kept as the server sent it. [`IndexDiagnostics::indices`]
/// hides the one structural difference between versions: whether the
/// per-index section sits at the top level or under `_all`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct IndexDiagnostics {
    raw: Value,
}

impl IndexDiagnostics {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    pub fn indices(&self) -> Option<&Map<String, Value>> {
        indices_section(&self.raw)
    }

    pub fn index(&self, name: &str) -> Option<&Value> {
        self.indices()?.get(name)
    }

    pub fn contains_index(&self, name: &str) -> bool {
        self.index(name).is_some()
    }

    pub fn as_value(&self) -> &Value {
        &self.raw
    }

    pub fn into_value(self) -> Value {
        self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_indices_from_either_location() {
        let current = IndexDiagnostics::new(json!({"indices": {"idx": {"primaries": {}}}}));
        let legacy = IndexDiagnostics::new(json!({"_all": {"indices": {"idx": {"primaries": {}}}}}));
        assert!(current.contains_index("idx"));
        assert!(legacy.contains_index("idx"));
        assert!(!legacy.contains_index("other"));
    }

    #[test]
    fn test_serializes_raw_body() {
        let raw = json!({"_shards": {"total": 1}, "indices": {}});
        let diag = IndexDiagnostics::new(raw.clone());
        assert_eq!(serde_json::to_value(&diag).unwrap(), raw);
    }
}
