//! Settings commands.

use std::collections::BTreeMap;

use anyhow::Result;
use esadmin_client::IndexSettings;
use serde_json::Value;

use super::{CommandContext, parse_object};
use crate::error::CliError;

pub async fn show(ctx: &CommandContext, get: Option<&str>) -> Result<()> {
    let index = ctx.index_admin()?;
    let by_index = index.settings().await?;

    let Some(path) = get else {
        return ctx.output.json(&by_index);
    };

    let value = select(&by_index, index.name().as_str())
        .and_then(|settings| settings.get(path))
        .ok_or_else(|| CliError::MissingSetting {
            path: path.to_string(),
        })?;
    ctx.output.json(value)
}

pub async fn update(ctx: &CommandContext, raw: &str) -> Result<()> {
    let partial = Value::Object(parse_object("settings", raw)?);
    let ack = ctx.index_admin()?.update_settings(&partial).await?;
    ctx.output.json(&ack.raw)
}

/// The entry for `name`, or the only entry when the name was an alias that
/// resolved to one concrete index.
fn select<'a>(
    by_index: &'a BTreeMap<String, IndexSettings>,
    name: &str,
) -> Option<&'a IndexSettings> {
    by_index.get(name).or_else(|| match by_index.len() {
        1 => by_index.values().next(),
        _ => None,
    })
}
