//! esadmin - command-line administration of search-engine indices.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build the HTTP transport from the merged configuration.
//! - Print each result as JSON and exit with a structured code.
//!
//! Does NOT handle:
//! - Request semantics or response normalization (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap defaults.
//! - Diagnostics go to stderr; stdout carries only the JSON result.

mod args;
mod commands;
mod dispatch;
mod error;
mod output;

use std::time::Duration;

use args::Cli;
use clap::Parser;
use commands::CommandContext;
use dispatch::run_command;
use esadmin_client::metrics_exporter::MetricsExporter;
use esadmin_client::tracing::TracingConfig;
use esadmin_client::{HttpTransport, MetricsCollector};
use esadmin_config::{Config, ConfigLoader};
use error::{CliError, ExitCode, ExitCodeExt};
use output::Output;

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    let mut tracing_config = TracingConfig::new().with_format(cli.log_format.into());
    if let Some(endpoint) = &cli.otlp_endpoint {
        tracing_config = tracing_config.with_otlp_endpoint(endpoint);
    }
    let tracing_guard = match tracing_config.init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize tracing: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let metrics = match &cli.metrics_bind {
        Some(bind_addr) => match MetricsExporter::install(bind_addr) {
            Ok(_) => Some(MetricsCollector::new()),
            Err(e) => {
                eprintln!("Failed to start metrics exporter: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        },
        None => None,
    };

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let exit_code = match run(cli, &config, metrics).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    tracing_guard.shutdown();
    std::process::exit(exit_code.as_i32());
}

/// Merge `.env`, environment and flags; flags win.
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new().from_env()?;

    if let Some(url) = &cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(username) = &cli.username {
        loader = loader.with_username(username.clone());
    }
    if let Some(password) = &cli.password {
        loader = loader.with_password(password.clone());
    }
    if let Some(key) = &cli.api_key {
        loader = loader.with_api_key(key.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }
    if let Some(retries) = cli.max_retries {
        loader = loader.with_max_retries(retries);
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    Ok(loader.build()?)
}

async fn run(
    cli: Cli,
    config: &Config,
    metrics: Option<MetricsCollector>,
) -> anyhow::Result<()> {
    if cli.command.needs_index() && cli.index.is_none() {
        return Err(CliError::MissingIndex.into());
    }

    let mut builder = HttpTransport::builder().from_config(config);
    if let Some(collector) = &metrics {
        builder = builder.metrics(collector.clone());
    }
    let transport = builder.build()?;

    let ctx = CommandContext {
        transport,
        index: cli.index,
        output: Output::new(cli.output_file),
        metrics,
    };
    run_command(cli.command, &ctx).await
}
