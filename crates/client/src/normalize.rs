//! Response normalization across server versions.
//!
//! The same semantic document comes back in different shapes depending on
//! the server release:
//!
//! - settings are *flat* (`{"index.number_of_shards": "3"}`) before 1.0 and
//!   *nested* (`{"index": {"number_of_shards": "3"}}`) after;
//! - mappings are wrapped in a `mappings` object on newer servers and bare
//!   under the index name on older ones;
//! - stats list indices at the top level or under `_all`.
//!
//! Everything here is a pure function over `serde_json::Value`. Lookups check
//! the flat dotted key first and only then walk nested objects; a `null`
//! counts as absent.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::{ClientError, Result};
use crate::models::{IndexSettings, MappingSet};

/// Where a dotted-path lookup found its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Located<'a> {
    /// The full dotted path was a key of the document.
    Flat(&'a Value),
    /// The value was reached by walking nested objects.
    Nested(&'a Value),
}

impl<'a> Located<'a> {
    pub fn value(self) -> &'a Value {
        match self {
            Located::Flat(v) | Located::Nested(v) => v,
        }
    }
}

/// Wire encoding of a settings object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsShape {
    Empty,
    /// Only dotted keys with scalar values.
    Flat,
    /// Only undotted keys, with at least one object value.
    Nested,
    /// Both dotted keys and nested objects.
    Mixed,
}

/// Find `path` in `doc`, reporting which encoding matched.
pub fn locate<'a>(doc: &'a Value, path: &str) -> Option<Located<'a>> {
    let map = doc.as_object()?;
    if let Some(value) = present(map.get(path)) {
        return Some(Located::Flat(value));
    }
    walk(map, path).map(Located::Nested)
}

/// Look up a dotted path in either encoding. Flat keys take precedence.
///
/// ```
/// use esadmin_client::normalize::lookup;
/// use serde_json::json;
///
/// let flat = json!({"index.number_of_shards": "3"});
/// let nested = json!({"index": {"number_of_shards": "3"}});
/// assert_eq!(lookup(&flat, "index.number_of_shards"), lookup(&nested, "index.number_of_shards"));
/// ```
pub fn lookup<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    locate(doc, path).map(Located::value)
}

/// Like [`lookup`], but a missing value is a [`ClientError::MalformedResponse`].
pub fn require<'a>(doc: &'a Value, path: &str) -> Result<&'a Value> {
    lookup(doc, path).ok_or_else(|| {
        ClientError::MalformedResponse(format!("missing '{}' in response", path))
    })
}

// Walks every split of the remaining path so partially flattened documents
// such as {"index": {"routing.allocation.enable": "all"}} still resolve.
fn walk<'a>(map: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    for (i, _) in path.match_indices('.') {
        let (head, rest) = (&path[..i], &path[i + 1..]);
        if let Some(Value::Object(child)) = map.get(head) {
            if let Some(value) = present(child.get(rest)) {
                return Some(value);
            }
            if let Some(value) = walk(child, rest) {
                return Some(value);
            }
        }
    }
    None
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

pub fn detect_shape(settings: &Value) -> SettingsShape {
    let Some(map) = settings.as_object() else {
        return SettingsShape::Empty;
    };
    if map.is_empty() {
        return SettingsShape::Empty;
    }
    let dotted = map.keys().any(|k| k.contains('.'));
    let nested = map.values().any(Value::is_object);
    match (dotted, nested) {
        (true, true) => SettingsShape::Mixed,
        (false, true) => SettingsShape::Nested,
        _ => SettingsShape::Flat,
    }
}

/// Collapse dotted keys into nested objects.
///
/// Nested entries are placed first and flat entries merged over them, so
/// when both encodings carry a leaf the flat value wins, matching
/// [`lookup`]. Non-object input is returned unchanged.
pub fn nest(settings: &Value) -> Value {
    let Some(map) = settings.as_object() else {
        return settings.clone();
    };

    let mut out = Value::Object(Map::new());
    for (key, value) in map.iter().filter(|(k, _)| !k.contains('.')) {
        merge(&mut out, expand(key, nest(value)));
    }
    for (key, value) in map.iter().filter(|(k, _)| k.contains('.')) {
        merge(&mut out, expand(key, nest(value)));
    }
    out
}

fn expand(dotted: &str, leaf: Value) -> Value {
    dotted.rsplit('.').fold(leaf, |acc, segment| {
        let mut map = Map::new();
        map.insert(segment.to_string(), acc);
        Value::Object(map)
    })
}

fn merge(target: &mut Value, incoming: Value) {
    match (target, incoming) {
        (Value::Object(into), Value::Object(from)) => {
            for (key, value) in from {
                match into.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        into.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Split a `GET /{idx}/_settings` response into per-index settings.
///
/// The response is `{idx: {"settings": {...}}}` on every version; only the
/// encoding inside `settings` varies.
pub fn settings_by_index(response: &Value) -> Result<BTreeMap<String, IndexSettings>> {
    let indices = as_object(response, "settings response")?;
    indices
        .iter()
        .map(|(index, entry)| {
            let settings = entry
                .get("settings")
                .filter(|v| v.is_object())
                .ok_or_else(|| {
                    ClientError::MalformedResponse(format!(
                        "settings response for '{}' has no 'settings' object",
                        index
                    ))
                })?;
            Ok((index.clone(), IndexSettings::from_wire(settings)))
        })
        .collect()
}

/// Split a `GET /{idx}/_mapping` response into per-index mapping sets.
///
/// Accepts `{idx: {"mappings": {type: ...}}}`, the legacy bare
/// `{idx: {type: ...}}`, and the typeless `{idx: {"mappings": {"properties":
/// ...}}}` which is filed under [`MappingSet::TYPELESS`]. An empty response
/// yields an empty map.
pub fn mappings_by_index(response: &Value) -> Result<BTreeMap<String, MappingSet>> {
    let indices = as_object(response, "mapping response")?;
    indices
        .iter()
        .map(|(index, entry)| {
            let entry = entry.as_object().ok_or_else(|| {
                ClientError::MalformedResponse(format!(
                    "mapping response for '{}' is not an object",
                    index
                ))
            })?;
            let types = match entry.get("mappings") {
                Some(Value::Object(wrapped)) => wrapped,
                Some(_) => {
                    return Err(ClientError::MalformedResponse(format!(
                        "'mappings' for '{}' is not an object",
                        index
                    )));
                }
                None => entry,
            };
            Ok((index.clone(), MappingSet::from_wire(types)))
        })
        .collect()
}

/// The per-index section of a stats, status or segments document.
///
/// Tries the top-level `indices` first, then `_all.indices`.
pub fn indices_section(doc: &Value) -> Option<&Map<String, Value>> {
    doc.get("indices")
        .and_then(Value::as_object)
        .or_else(|| doc.pointer("/_all/indices").and_then(Value::as_object))
}

fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| ClientError::MalformedResponse(format!("{} is not a JSON object", what)))
}
