//! Shared helpers for integration tests.
//!
//! Fixtures are recorded against the index `esadmin-index-test` and live in
//! `fixtures/` at the crate root.

use std::time::Duration;

#[allow(unused_imports)]
pub use esadmin_client::testing::load_fixture;
#[allow(unused_imports)]
pub use esadmin_client::{ClientError, HttpTransport, IndexAdmin};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Index name used by every fixture.
#[allow(dead_code)]
pub const INDEX: &str = "esadmin-index-test";

/// A transport that never retries.
#[allow(dead_code)]
pub fn transport(server: &MockServer) -> HttpTransport {
    HttpTransport::builder()
        .base_url(server.uri())
        .max_retries(0)
        .build()
        .expect("transport should build")
}

/// A transport with fast backoff for retry tests.
#[allow(dead_code)]
pub fn retrying_transport(server: &MockServer, max_retries: usize) -> HttpTransport {
    HttpTransport::builder()
        .base_url(server.uri())
        .max_retries(max_retries)
        .retry_backoff(Duration::from_millis(10))
        .build()
        .expect("transport should build")
}

/// Path of the test index followed by `suffix`.
#[allow(dead_code)]
pub fn index_path(suffix: &str) -> String {
    format!("/{}{}", INDEX, suffix)
}
