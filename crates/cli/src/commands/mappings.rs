//! Mapping commands.

use anyhow::Result;
use serde_json::Value;

use super::{CommandContext, parse_object};

pub async fn show(ctx: &CommandContext, doc_type: Option<&str>) -> Result<()> {
    let mappings = ctx.index_admin()?.mapping(doc_type).await?;
    ctx.output.json(&mappings)
}

pub async fn update(ctx: &CommandContext, doc_type: &str, raw: &str) -> Result<()> {
    let body = Value::Object(parse_object("mapping", raw)?);
    let ack = ctx.index_admin()?.update_mapping(doc_type, &body).await?;
    ctx.output.json(&ack.raw)
}

pub async fn delete(ctx: &CommandContext, doc_type: &str) -> Result<()> {
    let ack = ctx.index_admin()?.delete_mapping(doc_type).await?;
    ctx.output.json(&ack.raw)
}
