//! Centralized constants for the esadmin workspace.
//!
//! Default values used across crates live here to avoid magic number
//! duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default HTTP port of the cluster's REST API.
pub const DEFAULT_HTTP_PORT: u16 = 9200;

/// Default base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9200";

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default maximum number of retries for throttled or unavailable responses.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound accepted for `ESADMIN_MAX_RETRIES`.
pub const MAX_MAX_RETRIES: usize = 10;

// =============================================================================
// Environment Variable Names
// =============================================================================

pub const ENV_BASE_URL: &str = "ESADMIN_BASE_URL";
pub const ENV_USERNAME: &str = "ESADMIN_USERNAME";
pub const ENV_PASSWORD: &str = "ESADMIN_PASSWORD";
pub const ENV_API_KEY: &str = "ESADMIN_API_KEY";
pub const ENV_TIMEOUT: &str = "ESADMIN_TIMEOUT";
pub const ENV_MAX_RETRIES: &str = "ESADMIN_MAX_RETRIES";
pub const ENV_SKIP_VERIFY: &str = "ESADMIN_SKIP_VERIFY";
