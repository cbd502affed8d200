//! Cluster-scoped calls needed alongside index administration.
//!
//! # What this module handles:
//! - Alias mutation (`POST /_aliases`), which spans indices and so does not
//!   belong on [`crate::IndexAdmin`]
//! - Server version discovery from the root endpoint
//!
//! # What this module does NOT handle:
//! - Cluster health or topology

use serde::Serialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::ack::{Acknowledged, Verdict, acknowledgment};
use crate::capabilities::ServerVersion;
use crate::error::{ClientError, Result};
use crate::failure::ServerFailure;
use crate::models::AckResponse;
use crate::transport::{Method, Transport};

/// One step of an atomic alias update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AliasAction {
    Add { index: String, alias: String },
    Remove { index: String, alias: String },
}

impl AliasAction {
    pub fn add(index: impl Into<String>, alias: impl Into<String>) -> Self {
        AliasAction::Add {
            index: index.into(),
            alias: alias.into(),
        }
    }

    pub fn remove(index: impl Into<String>, alias: impl Into<String>) -> Self {
        AliasAction::Remove {
            index: index.into(),
            alias: alias.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClusterAdmin<T> {
    transport: T,
}

impl<T: Transport> ClusterAdmin<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Apply alias actions atomically.
    ///
    /// # Errors
    /// [`ClientError::InvalidArgument`] for an empty action list; a missing
    /// index is [`ClientError::NotFound`].
    pub async fn update_aliases(&self, actions: &[AliasAction]) -> Result<AckResponse> {
        if actions.is_empty() {
            return Err(ClientError::InvalidArgument(
                "at least one alias action is required".to_string(),
            ));
        }
        let body = json!({ "actions": actions });
        let path = "/_aliases";
        debug!(actions = actions.len(), "Updating aliases");
        let response = self
            .transport
            .execute(Method::Post, path, Some(&body), &[])
            .await?;
        if !response.is_success() {
            let failure = ServerFailure::from_response(path, &response);
            return Err(match failure.kind() {
                crate::failure::FailureKind::IndexMissing => {
                    ClientError::NotFound(failure.message)
                }
                _ => failure.into_error(),
            });
        }
        let ack = acknowledgment(response.into_body(path)?)?;
        if ack.verdict() == Verdict::NotAcknowledged {
            warn!("Alias update was accepted but not acknowledged by all nodes");
        }
        Ok(ack)
    }

    /// The version reported by `GET /`.
    pub async fn server_version(&self) -> Result<ServerVersion> {
        let response = self.transport.execute(Method::Get, "/", None, &[]).await?;
        if !response.is_success() {
            return Err(ServerFailure::from_response("/", &response).into_error());
        }
        ServerVersion::from_root_response(&response.into_body("/")?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_action_wire_shape() {
        let actions = vec![
            AliasAction::add("idx", "foofaloo"),
            AliasAction::remove("old", "foofaloo"),
        ];
        assert_eq!(
            json!({ "actions": actions }),
            json!({"actions": [
                {"add": {"index": "idx", "alias": "foofaloo"}},
                {"remove": {"index": "old", "alias": "foofaloo"}}
            ]})
        );
    }
}
