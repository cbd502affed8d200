//! Server information.

use anyhow::Result;
use esadmin_client::{is_major_version, supports_gateway_snapshots};
use serde_json::json;

use super::CommandContext;

pub async fn version(ctx: &CommandContext) -> Result<()> {
    let version = ctx.cluster().server_version().await?;
    ctx.output.json(&json!({
        "version": version.to_string(),
        "major": version.major,
        "minor": version.minor,
        "patch": version.patch,
        "qualifier": version.qualifier.as_deref(),
        "legacy": is_major_version(&version, 0),
        "gateway_snapshots": supports_gateway_snapshots(&version),
    }))
}
