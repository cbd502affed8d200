//! Builder for constructing [`HttpTransport`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for transport configuration
//! - Validating the base URL and normalizing away trailing slashes
//! - Configuring the underlying HTTP client (timeouts, TLS verification, redirects)
//!
//! # What this module does NOT handle:
//! - Sending requests (see [`HttpTransport`])
//! - Interpreting responses (see [`crate::index`])
//!
//! # Invariants
//! - `base_url` is required and must parse as an absolute URL
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use reqwest::Url;

use super::HttpTransport;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use esadmin_config::{
    AuthStrategy, Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS},
};

/// Default base delay between retries; doubled on every further attempt.
const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_secs(1);

/// Builder for creating a new [`HttpTransport`].
///
/// # Example
///
/// ```rust,ignore
/// use esadmin_client::HttpTransport;
///
/// let transport = HttpTransport::builder()
///     .base_url("http://localhost:9200".to_string())
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub struct HttpTransportBuilder {
    base_url: Option<String>,
    auth: AuthStrategy,
    skip_verify: bool,
    timeout: Duration,
    max_retries: usize,
    retry_backoff: Duration,
    metrics: Option<MetricsCollector>,
}

impl Default for HttpTransportBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            auth: AuthStrategy::Anonymous,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_backoff: DEFAULT_RETRY_BACKOFF,
            metrics: None,
        }
    }
}

impl HttpTransportBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the node, e.g. `http://localhost:9200`.
    ///
    /// Trailing slashes are removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the authentication strategy.
    pub fn auth(mut self, auth: AuthStrategy) -> Self {
        self.auth = auth;
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against development clusters with self-signed certificates.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retries for 429/502/503/504 responses.
    ///
    /// Zero disables retrying.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base backoff between retries. Default is one second.
    pub fn retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    /// Set the metrics collector for request tracking.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Create a transport builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.auth = config.auth.strategy.clone();
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.max_retries = config.connection.max_retries;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`HttpTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is missing or not an
    /// absolute URL, and [`ClientError::HttpError`] if the HTTP client fails
    /// to build.
    pub fn build(self) -> Result<HttpTransport> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);
        Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("Invalid base URL '{}': {}", base_url, e)))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(HttpTransport {
            http,
            base_url,
            auth: self.auth,
            timeout: self.timeout,
            max_retries: self.max_retries,
            retry_backoff: self.retry_backoff,
            metrics: self.metrics,
        })
    }
}
