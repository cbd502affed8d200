//! Per-index settings in canonical nested form.

use serde::Serialize;
use serde_json::Value;

use crate::normalize::{SettingsShape, detect_shape, lookup, nest};
use crate::serde_helpers::scalar_to_string;

/// Settings of one index.
///
/// Built from whichever encoding the server used; [`IndexSettings::get`]
/// answers dotted paths identically for both. Serializes as
/// `{"settings": {...}}` in nested form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexSettings {
    #[serde(skip)]
    shape: SettingsShape,
    settings: Value,
}

impl IndexSettings {
    /// Normalize a wire `settings` object.
    pub fn from_wire(raw: &Value) -> Self {
        Self {
            shape: detect_shape(raw),
            settings: nest(raw),
        }
    }

    /// The encoding the server responded with.
    pub fn shape(&self) -> SettingsShape {
        self.shape
    }

    pub fn get(&self, path: &str) -> Option<&Value> {
        lookup(&self.settings, path)
    }

    /// A scalar setting rendered as the server reports it (`"3"`, `"true"`).
    pub fn get_string(&self, path: &str) -> Option<String> {
        self.get(path).and_then(scalar_to_string)
    }

    pub fn number_of_shards(&self) -> Option<u32> {
        self.get_string("index.number_of_shards")?.parse().ok()
    }

    pub fn number_of_replicas(&self) -> Option<u32> {
        self.get_string("index.number_of_replicas")?.parse().ok()
    }

    pub fn as_value(&self) -> &Value {
        &self.settings
    }

    pub fn into_value(self) -> Value {
        self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_and_nested_read_the_same() {
        let flat = IndexSettings::from_wire(&json!({
            "index.number_of_shards": "3",
            "index.number_of_replicas": "0"
        }));
        let nested = IndexSettings::from_wire(&json!({
            "index": {"number_of_shards": "3", "number_of_replicas": "0"}
        }));

        assert_eq!(flat.shape(), SettingsShape::Flat);
        assert_eq!(nested.shape(), SettingsShape::Nested);
        assert_eq!(flat.number_of_shards(), Some(3));
        assert_eq!(nested.number_of_shards(), Some(3));
        assert_eq!(flat.get_string("index.number_of_replicas").as_deref(), Some("0"));
        assert_eq!(flat.as_value(), nested.as_value());
    }

    #[test]
    fn test_numeric_values_render_as_strings() {
        let settings = IndexSettings::from_wire(&json!({"index": {"number_of_replicas": 1}}));
        assert_eq!(settings.get_string("index.number_of_replicas").as_deref(), Some("1"));
        assert_eq!(settings.number_of_replicas(), Some(1));
    }

    #[test]
    fn test_serializes_nested_under_settings() {
        let settings = IndexSettings::from_wire(&json!({"index.number_of_shards": "1"}));
        assert_eq!(
            serde_json::to_value(&settings).unwrap(),
            json!({"settings": {"index": {"number_of_shards": "1"}}})
        );
    }

    #[test]
    fn test_absent_setting() {
        let settings = IndexSettings::from_wire(&json!({}));
        assert_eq!(settings.shape(), SettingsShape::Empty);
        assert_eq!(settings.number_of_shards(), None);
    }
}
