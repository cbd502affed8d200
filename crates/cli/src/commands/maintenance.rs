//! Data-plane and diagnostics commands.
//!
//! Shard operations print the server's result as-is and then exit with
//! code 8 when any shard failed, so scripts see both the counts and the
//! failure.

use anyhow::Result;
use esadmin_client::{IndexDiagnostics, supports_gateway_snapshots};
use tracing::{debug, info};

use super::{CommandContext, report_shards};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShardOperation {
    Refresh,
    Flush,
    Optimize,
    ClearCache,
}

impl ShardOperation {
    fn name(self) -> &'static str {
        match self {
            ShardOperation::Refresh => "refresh",
            ShardOperation::Flush => "flush",
            ShardOperation::Optimize => "optimize",
            ShardOperation::ClearCache => "clear-cache",
        }
    }
}

pub async fn shard_operation(ctx: &CommandContext, operation: ShardOperation) -> Result<()> {
    let index = ctx.index_admin()?;
    info!(index = %index.name(), operation = operation.name(), "Running shard operation");
    let outcome = match operation {
        ShardOperation::Refresh => index.refresh().await?,
        ShardOperation::Flush => index.flush().await?,
        ShardOperation::Optimize => index.optimize().await?,
        ShardOperation::ClearCache => index.clear_cache().await?,
    };
    report_shards(&ctx.output, operation.name(), &outcome)
}

/// Gateway snapshot. The server version is checked first unless `force`
/// is set.
pub async fn snapshot(ctx: &CommandContext, force: bool) -> Result<()> {
    let index = ctx.index_admin()?;
    let outcome = if force {
        index.snapshot().await?
    } else {
        let version = ctx.cluster().server_version().await?;
        debug!(
            %version,
            supported = supports_gateway_snapshots(&version),
            "Checked gateway snapshot support"
        );
        index.snapshot_if_supported(&version).await?
    };
    report_shards(&ctx.output, "snapshot", &outcome)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostics {
    Stats,
    Status,
    Segments,
}

pub async fn diagnostics(ctx: &CommandContext, kind: Diagnostics) -> Result<()> {
    let index = ctx.index_admin()?;
    let report: IndexDiagnostics = match kind {
        Diagnostics::Stats => index.stats().await?,
        Diagnostics::Status => index.status().await?,
        Diagnostics::Segments => index.segments().await?,
    };
    ctx.output.json(report.as_value())
}
