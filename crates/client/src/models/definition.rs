//! Request body for index creation.

use serde::Serialize;
use serde_json::{Map, Value};

/// Settings and mappings to create an index with.
///
/// `IndexAdmin::create(None)` sends no body at all and lets the server apply
/// its defaults; an empty definition serializes to `{}`.
///
/// ```
/// use esadmin_client::models::IndexDefinition;
/// use serde_json::json;
///
/// let def = IndexDefinition::new()
///     .number_of_shards(3)
///     .number_of_replicas(0)
///     .with_mapping("doco", json!({"properties": {"title": {"type": "string"}}}));
///
/// assert_eq!(def.to_body()["settings"]["number_of_shards"], 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndexDefinition {
    #[serde(skip_serializing_if = "Map::is_empty")]
    settings: Map<String, Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    mappings: Map<String, Value>,
}

impl IndexDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn number_of_shards(self, shards: u32) -> Self {
        self.with_setting("number_of_shards", Value::from(shards))
    }

    pub fn number_of_replicas(self, replicas: u32) -> Self {
        self.with_setting("number_of_replicas", Value::from(replicas))
    }

    /// Set one setting. Dotted and nested keys are both accepted by the server.
    pub fn with_setting(mut self, key: impl Into<String>, value: Value) -> Self {
        self.settings.insert(key.into(), value);
        self
    }

    /// Merge a settings object into the definition. Later keys win.
    pub fn with_settings(mut self, settings: Map<String, Value>) -> Self {
        self.settings.extend(settings);
        self
    }

    pub fn with_mapping(mut self, doc_type: impl Into<String>, mapping: Value) -> Self {
        self.mappings.insert(doc_type.into(), mapping);
        self
    }

    pub fn settings(&self) -> &Map<String, Value> {
        &self.settings
    }

    pub fn mappings(&self) -> &Map<String, Value> {
        &self.mappings
    }

    pub fn to_body(&self) -> Value {
        let mut body = Map::new();
        if !self.settings.is_empty() {
            body.insert("settings".to_string(), Value::Object(self.settings.clone()));
        }
        if !self.mappings.is_empty() {
            body.insert("mappings".to_string(), Value::Object(self.mappings.clone()));
        }
        Value::Object(body)
    }
}
