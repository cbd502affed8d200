//! Document-type mappings of one index.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Mapping documents keyed by document type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingSet {
    types: BTreeMap<String, Value>,
}

impl MappingSet {
    /// Type name used for typeless mappings (a bare `properties` object).
    pub const TYPELESS: &'static str = "_doc";

    /// Build from the object that maps type names to mapping documents.
    pub fn from_wire(types: &Map<String, Value>) -> Self {
        let typeless = matches!(
            types.get("properties"),
            Some(Value::Object(props)) if !props.contains_key("properties")
        );
        if typeless {
            return Self {
                types: BTreeMap::from([(Self::TYPELESS.to_string(), Value::Object(types.clone()))]),
            };
        }
        Self {
            types: types.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn get(&self, doc_type: &str) -> Option<&Value> {
        self.types.get(doc_type)
    }

    /// The `properties` object of a type, if the type is mapped.
    pub fn properties(&self, doc_type: &str) -> Option<&Map<String, Value>> {
        self.get(doc_type)?.get("properties")?.as_object()
    }

    pub fn has_property(&self, doc_type: &str, property: &str) -> bool {
        self.properties(doc_type)
            .is_some_and(|props| props.contains_key(property))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wire(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_typed_mapping() {
        let set = MappingSet::from_wire(&wire(json!({
            "doco": {"_source": {"enabled": false}, "properties": {"title": {"type": "string"}}}
        })));
        assert_eq!(set.types().collect::<Vec<_>>(), vec!["doco"]);
        assert!(set.has_property("doco", "title"));
        assert!(!set.has_property("doco", "author"));
        assert!(!set.has_property("missing", "title"));
    }

    #[test]
    fn test_typeless_mapping() {
        let set = MappingSet::from_wire(&wire(json!({
            "properties": {"title": {"type": "text"}}
        })));
        assert_eq!(set.len(), 1);
        assert!(set.has_property(MappingSet::TYPELESS, "title"));
    }

    #[test]
    fn test_type_named_properties_is_not_typeless() {
        let set = MappingSet::from_wire(&wire(json!({
            "properties": {"properties": {"title": {"type": "string"}}}
        })));
        assert!(set.has_property("properties", "title"));
    }

    #[test]
    fn test_serializes_transparently() {
        let set = MappingSet::from_wire(&wire(json!({"doco": {"properties": {}}})));
        assert_eq!(
            serde_json::to_value(&set).unwrap(),
            json!({"doco": {"properties": {}}})
        );
    }
}
