//! Metrics collection for administrative API calls.
//!
//! This module provides metrics collection for requests sent by
//! [`crate::HttpTransport`], including:
//! - Request latency histograms
//! - Request counters (total, retries, errors)
//! - Error categorization
//!
//! # What this module does NOT handle:
//! - Metrics exposition (see [`crate::metrics_exporter`])
//!
//! # Invariants
//! - All metrics use consistent label names: `endpoint`, `method`, `status`, `error_category`
//! - Metric recording is infallible
//! - Zero-cost when no metrics recorder is installed

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "esadmin_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "esadmin_requests_total";

/// Metric name for retry counter.
pub const METRIC_RETRIES_TOTAL: &str = "esadmin_retries_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "esadmin_errors_total";

/// Metric name for partial shard failure counter.
pub const METRIC_SHARD_FAILURES_TOTAL: &str = "esadmin_shard_failures_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transport-level errors (connection refused, DNS, etc.)
    Transport,
    /// HTTP 4xx client errors
    Http4xx,
    /// HTTP 5xx server errors
    Http5xx,
    /// Response did not have the expected shape
    Malformed,
    /// Request timeout
    Timeout,
    /// Unknown/unclassified errors
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Malformed => "malformed",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Timeout(_) => ErrorCategory::Timeout,
            ClientError::Network(_) => ErrorCategory::Transport,
            ClientError::MalformedResponse(_) | ClientError::Serialization(_) => {
                ErrorCategory::Malformed
            }
            ClientError::NotFound(_)
            | ClientError::AlreadyExists(_)
            | ClientError::InvalidSetting { .. } => ErrorCategory::Http4xx,
            ClientError::RequestFailed { status, .. } => {
                if (400..500).contains(status) {
                    ErrorCategory::Http4xx
                } else if (500..600).contains(status) {
                    ErrorCategory::Http5xx
                } else {
                    ErrorCategory::Unknown
                }
            }
            _ => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for administrative API calls.
///
/// A thin wrapper around the `metrics` crate macros that keeps label names
/// consistent.
///
/// # Example
///
/// ```rust,ignore
/// use esadmin_client::metrics::MetricsCollector;
///
/// let collector = MetricsCollector::new();
/// collector.record_request_duration("/logs/_refresh", "POST", Duration::from_millis(15), Some(200));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create a new, enabled metrics collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a disabled metrics collector.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if metrics collection is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of a request.
    ///
    /// `status` is `None` when the request failed before a response arrived.
    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt, including retries.
    pub fn record_request(&self, endpoint: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record a retry attempt (1-based; the initial request is not a retry).
    pub fn record_retry(&self, endpoint: &str, method: &str, attempt: usize) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_RETRIES_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "attempt" => attempt.to_string(),
        )
        .increment(1);
    }

    /// Record an error.
    pub fn record_error(&self, endpoint: &str, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    /// Record an error from a ClientError.
    pub fn record_client_error(&self, endpoint: &str, method: &str, error: &ClientError) {
        self.record_error(endpoint, method, ErrorCategory::from(error));
    }

    /// Record shards that failed during a data-plane operation.
    pub fn record_shard_failures(&self, operation: &'static str, failed: u64) {
        if !self.enabled || failed == 0 {
            return;
        }
        metrics::counter!(METRIC_SHARD_FAILURES_TOTAL, "operation" => operation).increment(failed);
    }
}
