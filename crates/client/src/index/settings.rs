//! Index settings.

use std::collections::BTreeMap;

use serde_json::Value;

use super::IndexAdmin;
use crate::error::{ClientError, Result};
use crate::failure::{FailureKind, ServerFailure};
use crate::models::{AckResponse, IndexSettings};
use crate::normalize::settings_by_index;
use crate::transport::{Method, Transport};

impl<T: Transport> IndexAdmin<T> {
    /// Current settings, keyed by index name.
    ///
    /// Flat and nested server encodings are both accepted; use
    /// [`IndexSettings::get`] with a dotted path to read a value.
    pub async fn settings(&self) -> Result<BTreeMap<String, IndexSettings>> {
        let path = self.path("/_settings");
        let body = self.request(Method::Get, &path, None).await?;
        settings_by_index(&body)
    }

    /// Apply a partial settings update. Keys may be dotted or nested.
    ///
    /// # Errors
    /// [`ClientError::InvalidSetting`] when the server refuses to change a
    /// non-dynamic setting on an open index.
    pub async fn update_settings(&self, partial: &Value) -> Result<AckResponse> {
        if !partial.is_object() {
            return Err(ClientError::InvalidArgument(
                "settings update must be a JSON object".to_string(),
            ));
        }
        let path = self.path("/_settings");
        let response = self.send(Method::Put, &path, Some(partial), &[]).await?;
        if !response.is_success() {
            let failure = ServerFailure::from_response(&path, &response);
            return Err(match failure.kind() {
                FailureKind::NonDynamicSetting => ClientError::InvalidSetting {
                    index: self.name.to_string(),
                    message: failure.message,
                },
                _ => self.classify(failure),
            });
        }
        self.acknowledged("update_settings", response.into_body(&path)?)
    }
}
