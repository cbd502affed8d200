//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading or transport construction (see `main()`).

use anyhow::Result;

use crate::args::Commands;
use crate::commands::analyze::AnalyzeArgs;
use crate::commands::maintenance::{Diagnostics, ShardOperation};
use crate::commands::{
    CommandContext, aliases, analyze, lifecycle, maintenance, mappings, server, settings,
};

pub(crate) async fn run_command(command: Commands, ctx: &CommandContext) -> Result<()> {
    match command {
        Commands::Exists => lifecycle::exists(ctx).await,
        Commands::Create {
            shards,
            replicas,
            settings,
            mappings,
        } => {
            lifecycle::create(
                ctx,
                shards,
                replicas,
                settings.as_deref(),
                mappings.as_deref(),
            )
            .await
        }
        Commands::Delete => lifecycle::delete(ctx).await,
        Commands::Open => lifecycle::open(ctx).await,
        Commands::Close => lifecycle::close(ctx).await,

        Commands::Settings { get } => settings::show(ctx, get.as_deref()).await,
        Commands::UpdateSettings { json } => settings::update(ctx, &json).await,

        Commands::Mapping { doc_type } => mappings::show(ctx, doc_type.as_deref()).await,
        Commands::UpdateMapping { doc_type, json } => {
            mappings::update(ctx, &doc_type, &json).await
        }
        Commands::DeleteMapping { doc_type } => mappings::delete(ctx, &doc_type).await,

        Commands::Aliases => aliases::show(ctx).await,
        Commands::AddAlias { name } => aliases::add(ctx, &name).await,
        Commands::RemoveAlias { name } => aliases::remove(ctx, &name).await,

        Commands::Analyze {
            text,
            analyzer,
            tokenizer,
            filters,
            field,
            unbound,
            terms,
        } => {
            let args = AnalyzeArgs {
                analyzer,
                tokenizer,
                filters,
                field,
                unbound,
                terms,
            };
            analyze::run(ctx, &text, &args).await
        }

        Commands::Refresh => maintenance::shard_operation(ctx, ShardOperation::Refresh).await,
        Commands::Flush => maintenance::shard_operation(ctx, ShardOperation::Flush).await,
        Commands::Optimize => maintenance::shard_operation(ctx, ShardOperation::Optimize).await,
        Commands::ClearCache => {
            maintenance::shard_operation(ctx, ShardOperation::ClearCache).await
        }
        Commands::Snapshot { force } => maintenance::snapshot(ctx, force).await,

        Commands::Stats => maintenance::diagnostics(ctx, Diagnostics::Stats).await,
        Commands::Status => maintenance::diagnostics(ctx, Diagnostics::Status).await,
        Commands::Segments => maintenance::diagnostics(ctx, Diagnostics::Segments).await,

        Commands::Version => server::version(ctx).await,
    }
}
