//! Retry helper for HTTP requests with exponential backoff.
//!
//! Retries only the statuses [`ClientError::is_retryable_status`] names
//! (429/502/503/504). When attempts run out, the last response is returned
//! as-is so the caller sees the real status rather than a synthetic error.

use std::time::{Duration, Instant};

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use super::Method;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Per-request context shared by every attempt.
pub(super) struct RetryContext<'a> {
    pub path: &'a str,
    pub method: Method,
    pub max_retries: usize,
    pub backoff: Duration,
    pub timeout: Duration,
    pub metrics: Option<&'a MetricsCollector>,
}

/// Sends an HTTP request, retrying throttled or unavailable responses.
///
/// Backoff doubles per attempt starting at `ctx.backoff` (1s, 2s, 4s with the
/// default). A builder whose body cannot be cloned is sent exactly once.
///
/// # Errors
///
/// Returns `ClientError::Timeout` when the request deadline elapses and
/// `ClientError::Network` for connection failures.
pub(super) async fn send_with_retry(
    builder: RequestBuilder,
    ctx: &RetryContext<'_>,
) -> Result<Response> {
    let endpoint = ctx.path;
    let method = ctx.method.as_str();

    let mut attempt = 0usize;
    loop {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                debug!("Request builder cannot be cloned, single attempt only");
                return send_once(builder, ctx).await;
            }
        };

        if attempt > 0
            && let Some(m) = ctx.metrics
        {
            m.record_retry(endpoint, method, attempt);
        }

        let response = send_once(attempt_builder, ctx).await?;
        let status = response.status().as_u16();

        if !ClientError::is_retryable_status(status) || attempt >= ctx.max_retries {
            if attempt > 0 {
                debug!(attempt = attempt + 1, status, "Request finished after retry");
            }
            return Ok(response);
        }

        let backoff = ctx.backoff * 2u32.pow(attempt as u32);
        debug!(
            attempt = attempt + 1,
            max_retries = ctx.max_retries + 1,
            status,
            backoff_ms = backoff.as_millis() as u64,
            "Retryable status, backing off"
        );
        tokio::time::sleep(backoff).await;
        attempt += 1;
    }
}

async fn send_once(builder: RequestBuilder, ctx: &RetryContext<'_>) -> Result<Response> {
    let endpoint = ctx.path;
    let method = ctx.method.as_str();

    if let Some(m) = ctx.metrics {
        m.record_request(endpoint, method);
    }

    let started = Instant::now();
    match builder.send().await {
        Ok(response) => {
            if let Some(m) = ctx.metrics {
                m.record_request_duration(
                    endpoint,
                    method,
                    started.elapsed(),
                    Some(response.status().as_u16()),
                );
            }
            Ok(response)
        }
        Err(e) => {
            let err = classify_send_error(e, ctx.timeout);
            if let Some(m) = ctx.metrics {
                m.record_request_duration(endpoint, method, started.elapsed(), None);
                m.record_client_error(endpoint, method, &err);
            }
            Err(err)
        }
    }
}

/// Map a reqwest failure onto the transport error taxonomy.
///
/// Applies to sending and to reading the body: the client deadline covers both.
pub(super) fn classify_send_error(e: reqwest::Error, timeout: Duration) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout(timeout)
    } else if e.is_connect() || e.is_request() {
        ClientError::Network(e.to_string())
    } else {
        ClientError::HttpError(e)
    }
}
