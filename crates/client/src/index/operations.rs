//! Data-plane operations and diagnostics.
//!
//! Refresh, flush, optimize, cache clear and gateway snapshot all answer
//! with a `_shards` block. A non-zero failure count is returned inside the
//! [`ShardsResponse`], never as an error.

use super::IndexAdmin;
use crate::capabilities::{ServerVersion, supports_gateway_snapshots};
use crate::error::{ClientError, Result};
use crate::models::{IndexDiagnostics, ShardsResponse};
use crate::transport::{Method, Transport};

impl<T: Transport> IndexAdmin<T> {
    pub async fn refresh(&self) -> Result<ShardsResponse> {
        self.shard_operation("refresh", "/_refresh").await
    }

    pub async fn flush(&self) -> Result<ShardsResponse> {
        self.shard_operation("flush", "/_flush").await
    }

    /// Merge segments (`_optimize`).
    pub async fn optimize(&self) -> Result<ShardsResponse> {
        self.shard_operation("optimize", "/_optimize").await
    }

    pub async fn clear_cache(&self) -> Result<ShardsResponse> {
        self.shard_operation("clear_cache", "/_cache/clear").await
    }

    /// Write the index to the shared gateway.
    ///
    /// Servers from 1.2.0 on no longer have this endpoint; check
    /// [`supports_gateway_snapshots`] first, or use
    /// [`IndexAdmin::snapshot_if_supported`].
    ///
    /// # Errors
    /// [`ClientError::Unsupported`] when the server has no handler for it.
    pub async fn snapshot(&self) -> Result<ShardsResponse> {
        self.shard_operation("snapshot", "/_gateway/snapshot").await
    }

    /// [`IndexAdmin::snapshot`], but fails with [`ClientError::Unsupported`]
    /// without contacting the server when `version` lacks the endpoint.
    pub async fn snapshot_if_supported(&self, version: &ServerVersion) -> Result<ShardsResponse> {
        if !supports_gateway_snapshots(version) {
            return Err(ClientError::Unsupported(format!(
                "gateway snapshots were removed in 1.2.0 (server is {})",
                version
            )));
        }
        self.snapshot().await
    }

    pub async fn stats(&self) -> Result<IndexDiagnostics> {
        self.diagnostics("/_stats").await
    }

    pub async fn status(&self) -> Result<IndexDiagnostics> {
        self.diagnostics("/_status").await
    }

    pub async fn segments(&self) -> Result<IndexDiagnostics> {
        self.diagnostics("/_segments").await
    }

    async fn shard_operation(
        &self,
        operation: &'static str,
        suffix: &str,
    ) -> Result<ShardsResponse> {
        let path = self.path(suffix);
        let body = self.request(Method::Post, &path, None).await?;
        self.shard_outcome(operation, body)
    }

    async fn diagnostics(&self, suffix: &str) -> Result<IndexDiagnostics> {
        let path = self.path(suffix);
        let body = self.request(Method::Get, &path, None).await?;
        Ok(IndexDiagnostics::new(body))
    }
}
