//! Index administration client for a search engine's HTTP API.
//!
//! The core is [`IndexAdmin`], which manages one named index through an
//! injected [`Transport`]. Responses that differ between server releases
//! (flat vs nested settings, wrapped vs bare mappings, `_all`-nested stats)
//! are normalized by [`normalize`], and write results are judged by
//! [`ack`]. [`HttpTransport`] is the reqwest-backed transport.

pub mod ack;
pub mod capabilities;
pub mod cluster;
pub mod error;
pub mod failure;
mod index;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;
pub mod normalize;
mod serde_helpers;
pub mod tracing;
pub mod transport;
pub mod url_encoding;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use ack::{Acknowledged, Verdict};
pub use capabilities::{ServerVersion, is_major_version, supports_gateway_snapshots};
pub use cluster::{AliasAction, ClusterAdmin};
pub use error::{ClientError, Result};
pub use index::{IndexAdmin, IndexName};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use models::{
    AckResponse, AliasSet, AnalyzeOptions, AnalyzeToken, AnalyzedTokens, IndexAliases,
    IndexDefinition, IndexDiagnostics, IndexSettings, MappingSet, ShardReport, ShardsResponse,
};
pub use normalize::{Located, SettingsShape};
pub use transport::builder::HttpTransportBuilder;
pub use transport::{HttpTransport, Method, Transport, TransportResponse};
