//! reqwest-backed [`Transport`] implementation.

use std::time::Duration;

use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::debug;

use super::retry::{RetryContext, classify_send_error, send_with_retry};
use super::{Method, Transport, TransportResponse};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use esadmin_config::AuthStrategy;

/// HTTP transport talking to one node of the cluster.
///
/// Construct with [`HttpTransport::builder()`]. The transport is cheap to
/// share behind `&` or `Arc`; reqwest pools connections internally.
#[derive(Debug)]
pub struct HttpTransport {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) auth: AuthStrategy,
    pub(crate) timeout: Duration,
    pub(crate) max_retries: usize,
    pub(crate) retry_backoff: Duration,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl HttpTransport {
    /// Create a new transport builder.
    pub fn builder() -> super::builder::HttpTransportBuilder {
        super::builder::HttpTransportBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth {
            AuthStrategy::Anonymous => builder,
            AuthStrategy::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
            AuthStrategy::ApiKey { key } => {
                builder.header("Authorization", format!("ApiKey {}", key.expose_secret()))
            }
        }
    }
}

/// Decode a response body: empty → `None`, JSON → value, anything else → string.
pub(crate) fn decode_body(bytes: &[u8]) -> Option<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    match serde_json::from_slice(bytes) {
        Ok(value) => Some(value),
        Err(_) => Some(Value::String(String::from_utf8_lossy(bytes).into_owned())),
    }
}

impl Transport for HttpTransport {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        params: &[(String, String)],
    ) -> Result<TransportResponse> {
        let url = format!("{}{}", self.base_url, path);

        let mut builder = self.http.request(method.into(), &url);
        if !params.is_empty() {
            builder = builder.query(params);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        builder = self.authorize(builder);
        builder = crate::tracing::inject_trace_context(builder);

        let ctx = RetryContext {
            path,
            method,
            max_retries: self.max_retries,
            backoff: self.retry_backoff,
            timeout: self.timeout,
            metrics: self.metrics.as_ref(),
        };
        let response = send_with_retry(builder, &ctx).await?;
        let status = response.status().as_u16();

        let body = if method == Method::Head {
            None
        } else {
            let bytes = response
                .bytes()
                .await
                .map_err(|e| classify_send_error(e, self.timeout))?;
            decode_body(&bytes)
        };

        debug!(method = %method, path, status, "Request completed");
        Ok(TransportResponse { status, body })
    }
}
