//! The request/response seam between index administration and the wire.
//!
//! Every administrative call goes through [`Transport::execute`], which sends
//! one request and hands back the raw status and decoded body. Non-2xx
//! statuses are *not* errors at this layer. Each operation decides what a
//! 404 or a 400 means for it (`exists` vs `delete` vs `delete_mapping`).
//!
//! # Submodules
//! - [`builder`]: [`HttpTransport`] construction and configuration
//! - `http`: the reqwest-backed [`HttpTransport`]
//! - `retry`: bounded retry of throttled/unavailable responses
//!
//! # Invariants
//! - Connection failures surface as [`ClientError::Network`], deadlines as
//!   [`ClientError::Timeout`]; neither is wrapped further.
//! - A response body that is not JSON is returned as a JSON string value.

pub mod builder;
mod http;
mod retry;

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{ClientError, Result};

pub use http::HttpTransport;

/// HTTP methods used by the administrative API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
    Head,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Put => reqwest::Method::PUT,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
            Method::Head => reqwest::Method::HEAD,
        }
    }
}

/// Raw outcome of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Option<Value>,
}

impl TransportResponse {
    pub fn new(status: u16, body: Option<Value>) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Take the body, failing with `MalformedResponse` when there is none.
    pub fn into_body(self, path: &str) -> Result<Value> {
        self.body.ok_or_else(|| {
            ClientError::MalformedResponse(format!("empty response body from {}", path))
        })
    }
}

/// A handle capable of executing administrative requests.
///
/// Implementations must be safe to share; [`crate::IndexAdmin`] holds no
/// locks of its own.
pub trait Transport: Send + Sync {
    /// Send one request and return the status and decoded body.
    ///
    /// `path` always starts with `/` and is already percent-encoded.
    fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        params: &[(String, String)],
    ) -> impl Future<Output = Result<TransportResponse>> + Send;
}

impl<T: Transport> Transport for &T {
    fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        params: &[(String, String)],
    ) -> impl Future<Output = Result<TransportResponse>> + Send {
        (**self).execute(method, path, body, params)
    }
}

impl<T: Transport> Transport for Arc<T> {
    fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        params: &[(String, String)],
    ) -> impl Future<Output = Result<TransportResponse>> + Send {
        (**self).execute(method, path, body, params)
    }
}
