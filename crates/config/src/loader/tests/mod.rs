//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` and `env_lock()` to prevent environment pollution.

use std::sync::Mutex;

pub mod env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads, cleared so host settings never leak in.
pub const CLEARED_VARS: [(&str, Option<&str>); 7] = [
    ("ESADMIN_BASE_URL", None),
    ("ESADMIN_USERNAME", None),
    ("ESADMIN_PASSWORD", None),
    ("ESADMIN_API_KEY", None),
    ("ESADMIN_TIMEOUT", None),
    ("ESADMIN_MAX_RETRIES", None),
    ("ESADMIN_SKIP_VERIFY", None),
];
