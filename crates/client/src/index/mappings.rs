//! Document-type mappings.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::debug;

use super::IndexAdmin;
use crate::ack::synthesized_ack;
use crate::error::{ClientError, Result};
use crate::failure::{FailureKind, ServerFailure};
use crate::models::{AckResponse, MappingSet};
use crate::normalize::mappings_by_index;
use crate::transport::{Method, Transport};
use crate::url_encoding::encode_path_segment;

impl<T: Transport> IndexAdmin<T> {
    /// Mappings keyed by index name, optionally limited to one type.
    ///
    /// An index with no mappings may be reported as an empty map or as an
    /// index entry with an empty [`MappingSet`], depending on the server.
    /// A type the index does not have yields the latter; a missing index is
    /// [`ClientError::NotFound`].
    pub async fn mapping(&self, doc_type: Option<&str>) -> Result<BTreeMap<String, MappingSet>> {
        let path = match doc_type {
            Some(t) => self.path(&format!("/_mapping/{}", encode_path_segment(t))),
            None => self.path("/_mapping"),
        };
        let response = self.send(Method::Get, &path, None, &[]).await?;
        if response.is_success() {
            return mappings_by_index(&response.into_body(&path)?);
        }

        let failure = ServerFailure::from_response(&path, &response);
        match failure.kind() {
            FailureKind::TypeMissing => {
                debug!(index = %self.name, doc_type, "Type has no mapping");
                Ok(BTreeMap::from([(self.name.to_string(), MappingSet::default())]))
            }
            _ => Err(self.classify(failure)),
        }
    }

    /// Add or change properties of a type.
    ///
    /// The server merges: properties already mapped on the type are kept.
    /// `body` may be the type mapping itself or wrapped as `{type: {...}}`;
    /// it is sent wrapped. A body whose only key is the type name is taken
    /// as already wrapped, so a type named like a mapping key (`properties`,
    /// `_source`, `dynamic`) must be passed in the wrapped form.
    pub async fn update_mapping(&self, doc_type: &str, body: &Value) -> Result<AckResponse> {
        let doc_type = non_empty_type(doc_type)?;
        let wrapped = wrap_type(doc_type, body)?;
        let path = self.path(&format!("/_mapping/{}", encode_path_segment(doc_type)));
        let response = self.request(Method::Put, &path, Some(&wrapped)).await?;
        self.acknowledged("update_mapping", response)
    }

    /// Remove a type mapping.
    ///
    /// Idempotent: if the type is already absent, an acknowledged result is
    /// returned. A missing *index* is still [`ClientError::NotFound`].
    pub async fn delete_mapping(&self, doc_type: &str) -> Result<AckResponse> {
        let doc_type = non_empty_type(doc_type)?;
        let path = self.path(&format!("/_mapping/{}", encode_path_segment(doc_type)));
        let response = self.send(Method::Delete, &path, None, &[]).await?;
        if response.is_success() {
            return match response.body {
                Some(body) => self.acknowledged("delete_mapping", body),
                None => Ok(synthesized_ack()),
            };
        }

        let failure = ServerFailure::from_response(&path, &response);
        match failure.kind() {
            FailureKind::IndexMissing => Err(ClientError::NotFound(self.name.to_string())),
            kind if kind == FailureKind::TypeMissing || failure.status == 404 => {
                debug!(index = %self.name, doc_type, "Mapping already absent");
                Ok(synthesized_ack())
            }
            _ => Err(self.classify(failure)),
        }
    }
}

fn non_empty_type(doc_type: &str) -> Result<&str> {
    if doc_type.trim().is_empty() {
        return Err(ClientError::InvalidArgument(
            "document type must not be empty".to_string(),
        ));
    }
    Ok(doc_type)
}

/// `{doc_type: body}` unless `body` is already exactly that.
///
/// A single-key object keyed by `doc_type` is always read as wrapped; for
/// `doc_type = "properties"` the bare `{"properties": {...}}` is ambiguous
/// and goes out as given.
fn wrap_type(doc_type: &str, body: &Value) -> Result<Value> {
    let Some(map) = body.as_object() else {
        return Err(ClientError::InvalidArgument(
            "mapping body must be a JSON object".to_string(),
        ));
    };
    if map.len() == 1 && map.get(doc_type).is_some_and(Value::is_object) {
        return Ok(body.clone());
    }
    let mut wrapped = Map::new();
    wrapped.insert(doc_type.to_string(), body.clone());
    Ok(Value::Object(wrapped))
}
