//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Bind global connection flags to the same environment variables the
//!   config loader reads, so `.env` values become clap defaults.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate connection settings (see `esadmin_config::ConfigLoader`).

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use esadmin_client::tracing::LogFormat;

#[derive(Parser)]
#[command(name = "esadmin")]
#[command(about = "Administer search-engine indices from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  esadmin -i books create --shards 3 --replicas 0\n  esadmin -i books settings --get index.number_of_shards\n  esadmin -i books update-mapping doc '{\"properties\":{\"author\":{\"type\":\"string\"}}}'\n  esadmin analyze 'Just a few words' --analyzer simple --unbound\n  esadmin version\n"
)]
pub struct Cli {
    /// Base URL of the cluster HTTP API (e.g., http://localhost:9200)
    #[arg(short, long, global = true, env = "ESADMIN_BASE_URL")]
    pub base_url: Option<String>,

    /// Username for basic authentication
    #[arg(short, long, global = true, env = "ESADMIN_USERNAME")]
    pub username: Option<String>,

    /// Password for basic authentication
    #[arg(short, long, global = true, env = "ESADMIN_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// API key (preferred over username/password)
    #[arg(short, long, global = true, env = "ESADMIN_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "ESADMIN_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Maximum number of retries for throttled or unavailable responses
    #[arg(long, global = true, env = "ESADMIN_MAX_RETRIES")]
    pub max_retries: Option<usize>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "ESADMIN_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Index to operate on
    #[arg(short, long, global = true, env = "ESADMIN_INDEX")]
    pub index: Option<String>,

    /// Write the JSON result to a file instead of stdout
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Diagnostic log format on stderr (filter with RUST_LOG)
    #[arg(long, global = true, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,

    /// OTLP gRPC endpoint for trace export (e.g., http://localhost:4317)
    #[arg(long, global = true, env = "ESADMIN_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,

    /// Serve Prometheus metrics on this address while the command runs
    #[arg(long, global = true, value_name = "ADDR")]
    pub metrics_bind: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
    Off,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
            LogFormatArg::Off => LogFormat::Off,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether the index exists (prints true or false)
    Exists,

    /// Create the index
    Create {
        /// Number of primary shards
        #[arg(long)]
        shards: Option<u32>,

        /// Number of replicas per shard
        #[arg(long)]
        replicas: Option<u32>,

        /// Additional settings as a JSON object (flat or nested keys)
        #[arg(long, value_name = "JSON")]
        settings: Option<String>,

        /// Mappings as a JSON object keyed by type name
        #[arg(long, value_name = "JSON")]
        mappings: Option<String>,
    },

    /// Delete the index
    Delete,

    /// Show index settings
    Settings {
        /// Print only the value at this dotted path (e.g., index.number_of_shards)
        #[arg(long, value_name = "PATH")]
        get: Option<String>,
    },

    /// Update dynamic index settings
    UpdateSettings {
        /// Partial settings as a JSON object
        json: String,
    },

    /// Show the index mappings
    Mapping {
        /// Restrict to one type
        #[arg(long = "type", value_name = "TYPE")]
        doc_type: Option<String>,
    },

    /// Merge a mapping into a type
    UpdateMapping {
        /// Type name
        doc_type: String,
        /// Mapping body as a JSON object, with or without the type wrapper
        json: String,
    },

    /// Delete a type's mapping (succeeds if the type is already absent)
    DeleteMapping {
        /// Type name
        doc_type: String,
    },

    /// Show aliases pointing at the index
    Aliases,

    /// Point an alias at the index
    AddAlias {
        /// Alias name
        name: String,
    },

    /// Remove an alias from the index
    RemoveAlias {
        /// Alias name
        name: String,
    },

    /// Run text through an analyzer and print the tokens
    Analyze {
        /// Text to analyze
        text: String,

        /// Analyzer name (e.g., simple, standard)
        #[arg(long)]
        analyzer: Option<String>,

        /// Tokenizer name
        #[arg(long)]
        tokenizer: Option<String>,

        /// Comma-separated token filters
        #[arg(long)]
        filters: Option<String>,

        /// Use the analyzer configured for this field
        #[arg(long)]
        field: Option<String>,

        /// Use the cluster-level endpoint instead of the index's
        #[arg(long)]
        unbound: bool,

        /// Print only the terms, one per line
        #[arg(long)]
        terms: bool,
    },

    /// Open a closed index
    Open,

    /// Close the index
    Close,

    /// Make recent writes searchable
    Refresh,

    /// Flush the index to durable storage
    Flush,

    /// Merge index segments
    Optimize,

    /// Clear the index caches
    ClearCache,

    /// Trigger a gateway snapshot (servers before 1.2 only)
    Snapshot {
        /// Send the request even if the server version says it is unsupported
        #[arg(long)]
        force: bool,
    },

    /// Show index statistics
    Stats,

    /// Show index status
    Status,

    /// Show Lucene segment information
    Segments,

    /// Show the server version
    Version,
}

impl Commands {
    /// Whether the command operates on a named index.
    pub fn needs_index(&self) -> bool {
        match self {
            Commands::Version => false,
            Commands::Analyze { unbound, .. } => !unbound,
            _ => true,
        }
    }
}
