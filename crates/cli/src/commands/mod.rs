//! CLI command implementations.

pub mod aliases;
pub mod analyze;
pub mod lifecycle;
pub mod maintenance;
pub mod mappings;
pub mod server;
pub mod settings;

use anyhow::Result;
use esadmin_client::{ClusterAdmin, HttpTransport, IndexAdmin, MetricsCollector, ShardsResponse};
use serde_json::{Map, Value};

use crate::error::CliError;
use crate::output::Output;

/// What every command handler receives.
pub struct CommandContext {
    pub transport: HttpTransport,
    pub index: Option<String>,
    pub output: Output,
    /// Set when `--metrics-bind` installed an exporter.
    pub metrics: Option<MetricsCollector>,
}

impl CommandContext {
    /// An [`IndexAdmin`] for `--index`.
    ///
    /// # Errors
    /// [`CliError::MissingIndex`] when no index was given, or the client's
    /// `InvalidArgument` for a blank one.
    pub fn index_admin(&self) -> Result<IndexAdmin<&HttpTransport>> {
        let name = self.index.as_deref().ok_or(CliError::MissingIndex)?;
        let index = IndexAdmin::new(name, &self.transport)?;
        Ok(match &self.metrics {
            Some(collector) => index.with_metrics(collector.clone()),
            None => index,
        })
    }

    pub fn cluster(&self) -> ClusterAdmin<&HttpTransport> {
        ClusterAdmin::new(&self.transport)
    }
}

/// Parse a JSON argument that must be an object.
pub fn parse_object(arg: &'static str, raw: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str(raw).map_err(|source| CliError::InvalidJson { arg, source })? {
        Value::Object(map) => Ok(map),
        _ => Err(CliError::NotAnObject { arg }.into()),
    }
}

/// Print a shard-level result, then fail with exit code 8 if any shard
/// failed.
pub fn report_shards(
    output: &Output,
    operation: &'static str,
    outcome: &ShardsResponse,
) -> Result<()> {
    output.json(&outcome.raw)?;
    if !outcome.is_complete() {
        return Err(CliError::PartialShardFailure {
            operation,
            failed: outcome.failed(),
            total: outcome.shards.total,
        }
        .into());
    }
    Ok(())
}
