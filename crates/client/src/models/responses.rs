//! Write-operation results.
//!
//! See [`crate::ack`] for how these are built and judged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of a structural write (create, delete, open, close, settings and
/// mapping updates, alias changes).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AckResponse {
    pub acknowledged: bool,
    #[serde(skip)]
    pub raw: Value,
}

/// Per-shard outcome counters from a `_shards` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardReport {
    #[serde(deserialize_with = "crate::serde_helpers::u64_from_string_or_number")]
    pub total: u64,
    #[serde(deserialize_with = "crate::serde_helpers::u64_from_string_or_number")]
    pub successful: u64,
    #[serde(deserialize_with = "crate::serde_helpers::u64_from_string_or_number")]
    pub failed: u64,
    /// Per-shard failure details, when the server includes them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<Value>,
}

/// Result of a data-plane operation (refresh, flush, optimize, cache clear,
/// gateway snapshot). A non-zero `failed` count is data, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShardsResponse {
    #[serde(rename = "_shards")]
    pub shards: ShardReport,
    #[serde(skip)]
    pub raw: Value,
}

impl ShardsResponse {
    pub fn failed(&self) -> u64 {
        self.shards.failed
    }

    pub fn is_complete(&self) -> bool {
        self.shards.failed == 0
    }
}
