//! Index lifecycle commands: exists, create, delete, open, close.

use anyhow::Result;
use esadmin_client::IndexDefinition;
use tracing::info;

use super::{CommandContext, parse_object};

pub async fn exists(ctx: &CommandContext) -> Result<()> {
    let index = ctx.index_admin()?;
    let exists = index.exists().await?;
    ctx.output.json(&exists)
}

pub async fn create(
    ctx: &CommandContext,
    shards: Option<u32>,
    replicas: Option<u32>,
    settings: Option<&str>,
    mappings: Option<&str>,
) -> Result<()> {
    let index = ctx.index_admin()?;
    let definition = definition(shards, replicas, settings, mappings)?;
    info!(index = %index.name(), with_body = definition.is_some(), "Creating index");
    let ack = index.create(definition.as_ref()).await?;
    ctx.output.json(&ack.raw)
}

pub async fn delete(ctx: &CommandContext) -> Result<()> {
    let index = ctx.index_admin()?;
    info!(index = %index.name(), "Deleting index");
    let ack = index.delete().await?;
    ctx.output.json(&ack.raw)
}

pub async fn open(ctx: &CommandContext) -> Result<()> {
    let ack = ctx.index_admin()?.open().await?;
    ctx.output.json(&ack.raw)
}

pub async fn close(ctx: &CommandContext) -> Result<()> {
    let ack = ctx.index_admin()?.close().await?;
    ctx.output.json(&ack.raw)
}

/// The create body, or `None` when no flag asks for one so the server
/// applies its defaults.
fn definition(
    shards: Option<u32>,
    replicas: Option<u32>,
    settings: Option<&str>,
    mappings: Option<&str>,
) -> Result<Option<IndexDefinition>> {
    if shards.is_none() && replicas.is_none() && settings.is_none() && mappings.is_none() {
        return Ok(None);
    }

    let mut definition = IndexDefinition::new();
    if let Some(raw) = settings {
        definition = definition.with_settings(parse_object("--settings", raw)?);
    }
    if let Some(shards) = shards {
        definition = definition.number_of_shards(shards);
    }
    if let Some(replicas) = replicas {
        definition = definition.number_of_replicas(replicas);
    }
    if let Some(raw) = mappings {
        for (doc_type, mapping) in parse_object("--mappings", raw)? {
            definition = definition.with_mapping(doc_type, mapping);
        }
    }
    Ok(Some(definition))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_flags_means_no_body() {
        assert!(definition(None, None, None, None).unwrap().is_none());
    }

    #[test]
    fn test_shard_flags_override_settings_json() {
        let definition = definition(
            Some(3),
            Some(0),
            Some(r#"{"number_of_shards": 1, "index.refresh_interval": "1s"}"#),
            None,
        )
        .unwrap()
        .unwrap();
        let body = definition.to_body();
        assert_eq!(body["settings"]["number_of_shards"], json!(3));
        assert_eq!(body["settings"]["number_of_replicas"], json!(0));
        assert_eq!(body["settings"]["index.refresh_interval"], json!("1s"));
    }

    #[test]
    fn test_mappings_keyed_by_type() {
        let definition = definition(
            None,
            None,
            None,
            Some(r#"{"doc": {"properties": {"title": {"type": "string"}}}}"#),
        )
        .unwrap()
        .unwrap();
        assert!(definition.mappings().contains_key("doc"));
    }

    #[test]
    fn test_bad_settings_json_is_rejected() {
        assert!(definition(None, None, Some("nope"), None).is_err());
    }
}
