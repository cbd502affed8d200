//! Per-index administration.
//!
//! [`IndexAdmin`] is the administrative surface for one named index. Every
//! method issues exactly one request through the injected [`Transport`] and
//! turns the response into a typed result.
//!
//! # Submodules
//! - `lifecycle`: exists, create, delete, open, close
//! - `settings`: settings read and update
//! - `mappings`: mapping read, update and delete
//! - `aliases`: alias listing
//! - `analyze`: text analysis
//! - `operations`: refresh, flush, optimize, cache clear, snapshot and the
//!   stats/status/segments diagnostics
//!
//! # What this module does NOT handle:
//! - Retrying (the transport retries throttled responses; the caller owns
//!   any other policy)
//! - Waiting for writes to become visible. A read right after an
//!   acknowledged write may still observe the old state.
//! - Alias mutation (see [`crate::ClusterAdmin`])
//!
//! # Invariants
//! - The index name is validated at construction, before any request.
//! - No state is cached; every accessor reads from the server.
//! - Partial shard failures are returned as data and logged at `warn`.

mod aliases;
mod analyze;
mod lifecycle;
mod mappings;
mod operations;
mod settings;

use std::fmt;

use serde_json::Value;
use tracing::{debug, warn};

use crate::ack::{Acknowledged, Verdict};
use crate::error::{ClientError, Result};
use crate::failure::{FailureKind, ServerFailure};
use crate::metrics::MetricsCollector;
use crate::models::{AckResponse, ShardsResponse};
use crate::transport::{Method, Transport, TransportResponse};
use crate::url_encoding::encode_path_segment;

/// A validated, non-empty index name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexName(String);

impl IndexName {
    /// # Errors
    /// [`ClientError::InvalidArgument`] when the name is empty or only
    /// whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ClientError::InvalidArgument(
                "index name must not be empty".to_string(),
            ));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IndexName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IndexName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Administrative operations on one index.
///
/// ```rust,ignore
/// use esadmin_client::{HttpTransport, IndexAdmin};
///
/// let transport = HttpTransport::builder()
///     .base_url("http://localhost:9200".to_string())
///     .build()?;
/// let index = IndexAdmin::new("articles", &transport)?;
///
/// if !index.exists().await? {
///     index.create(None).await?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct IndexAdmin<T> {
    name: IndexName,
    /// Percent-encoded form of `name`, used in every path.
    segment: String,
    transport: T,
    metrics: Option<MetricsCollector>,
}

impl<T: Transport> IndexAdmin<T> {
    /// # Errors
    /// [`ClientError::InvalidArgument`] for an empty name. No request is made.
    pub fn new(name: impl Into<String>, transport: T) -> Result<Self> {
        let name = IndexName::new(name)?;
        Ok(Self::with_name(name, transport))
    }

    pub fn with_name(name: IndexName, transport: T) -> Self {
        let segment = encode_path_segment(name.as_str());
        Self {
            name,
            segment,
            transport,
            metrics: None,
        }
    }

    /// Count partial shard failures in the given collector.
    pub fn with_metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn name(&self) -> &IndexName {
        &self.name
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `/{index}` followed by `suffix` (which starts with `/` or is empty).
    fn path(&self, suffix: &str) -> String {
        format!("/{}{}", self.segment, suffix)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        params: &[(String, String)],
    ) -> Result<TransportResponse> {
        debug!(index = %self.name, %method, path, "Sending index request");
        let response = self.transport.execute(method, path, body, params).await?;
        debug!(index = %self.name, %method, path, status = response.status, "Index request completed");
        Ok(response)
    }

    /// Send, map a non-2xx status through [`Self::classify`], and return the
    /// body.
    async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        let response = self.send(method, path, body, &[]).await?;
        if !response.is_success() {
            return Err(self.classify(ServerFailure::from_response(path, &response)));
        }
        response.into_body(path)
    }

    /// The error for a failure that no operation-specific rule claimed.
    fn classify(&self, failure: ServerFailure) -> ClientError {
        match failure.kind() {
            FailureKind::AlreadyExists => ClientError::AlreadyExists(self.name.to_string()),
            FailureKind::IndexMissing => ClientError::NotFound(self.name.to_string()),
            FailureKind::NoHandler => ClientError::Unsupported(format!(
                "{} is not available on this server: {}",
                failure.path, failure.message
            )),
            _ if failure.status == 404 => ClientError::NotFound(self.name.to_string()),
            _ => failure.into_error(),
        }
    }

    fn acknowledged(&self, operation: &'static str, body: Value) -> Result<AckResponse> {
        let ack = crate::ack::acknowledgment(body)?;
        if ack.verdict() == Verdict::NotAcknowledged {
            warn!(
                index = %self.name,
                operation,
                "Write was accepted but not acknowledged by all nodes"
            );
        }
        Ok(ack)
    }

    fn shard_outcome(&self, operation: &'static str, body: Value) -> Result<ShardsResponse> {
        let outcome = crate::ack::shard_outcome(body)?;
        if let Verdict::PartialFailure { failed } = outcome.verdict() {
            warn!(
                index = %self.name,
                operation,
                failed,
                total = outcome.shards.total,
                "Operation failed on some shards"
            );
            if let Some(metrics) = &self.metrics {
                metrics.record_shard_failures(operation, failed);
            }
        }
        Ok(outcome)
    }
}
