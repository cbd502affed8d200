//! Alias commands.
//!
//! Reads go through the index; changes go through the cluster-level
//! `/_aliases` endpoint so each one is applied atomically.

use anyhow::Result;
use esadmin_client::AliasAction;
use tracing::info;

use super::CommandContext;

pub async fn show(ctx: &CommandContext) -> Result<()> {
    let aliases = ctx.index_admin()?.get_aliases().await?;
    ctx.output.json(&aliases)
}

pub async fn add(ctx: &CommandContext, alias: &str) -> Result<()> {
    let index = ctx.index_admin()?;
    info!(index = %index.name(), alias, "Adding alias");
    let actions = [AliasAction::add(index.name().as_str(), alias)];
    let ack = ctx.cluster().update_aliases(&actions).await?;
    ctx.output.json(&ack.raw)
}

pub async fn remove(ctx: &CommandContext, alias: &str) -> Result<()> {
    let index = ctx.index_admin()?;
    info!(index = %index.name(), alias, "Removing alias");
    let actions = [AliasAction::remove(index.name().as_str(), alias)];
    let ack = ctx.cluster().update_aliases(&actions).await?;
    ctx.output.json(&ack.raw)
}
