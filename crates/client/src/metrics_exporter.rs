//! Prometheus metrics exporter.
//!
//! Serves everything recorded through the `metrics` crate in Prometheus text
//! format at `/metrics`, using `metrics-exporter-prometheus`.
//!
//! # Example
//!
//! ```rust,ignore
//! use esadmin_client::metrics_exporter::MetricsExporter;
//!
//! let exporter = MetricsExporter::install("127.0.0.1:9464")?;
//! ```

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::info;

use crate::metrics::METRIC_REQUEST_DURATION;

/// Metrics exporter for Prometheus scraping.
///
/// Installing it registers a global recorder and starts an HTTP listener on
/// the bind address. Must be called from within a Tokio runtime.
pub struct MetricsExporter {
    bind_addr: SocketAddr,
}

impl MetricsExporter {
    /// Install the Prometheus exporter as the global metrics recorder.
    ///
    /// # Errors
    /// Returns an error if the bind address is invalid, a recorder is already
    /// installed, or the listener fails to start.
    pub fn install(bind_addr: &str) -> Result<Self, MetricsExporterError> {
        let addr: SocketAddr = bind_addr
            .parse()
            .map_err(|e| MetricsExporterError::InvalidBindAddress(bind_addr.to_string(), e))?;

        PrometheusBuilder::new()
            .set_buckets_for_metric(
                metrics_exporter_prometheus::Matcher::Full(METRIC_REQUEST_DURATION.to_string()),
                &[
                    0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
                ],
            )?
            .with_http_listener(addr)
            .install()?;

        info!(
            "Prometheus metrics exporter started on http://{}/metrics",
            addr
        );

        Ok(Self { bind_addr: addr })
    }

    /// Get the bind address.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

/// Errors that can occur when installing the metrics exporter.
#[derive(Debug, thiserror::Error)]
pub enum MetricsExporterError {
    /// Invalid bind address provided.
    #[error("Invalid bind address '{0}': {1}")]
    InvalidBindAddress(String, std::net::AddrParseError),

    /// Failed to build or install the Prometheus recorder.
    #[error("Failed to install Prometheus exporter: {0}")]
    BuildError(String),
}

impl From<metrics_exporter_prometheus::BuildError> for MetricsExporterError {
    fn from(err: metrics_exporter_prometheus::BuildError) -> Self {
        MetricsExporterError::BuildError(err.to_string())
    }
}
