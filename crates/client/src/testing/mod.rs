//! Helpers for tests against recorded server responses.
//!
//! Available in unit tests and, with the `test-utils` feature, to
//! integration tests.
//!
//! ```ignore
//! use esadmin_client::testing::load_fixture;
//!
//! let settings = load_fixture("settings/flat.json");
//! ```

use std::path::Path;

/// Load a JSON fixture from the crate's `fixtures/` directory.
///
/// # Panics
/// If the file is missing or not valid JSON.
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let full_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Invalid JSON in fixture {}: {}", full_path.display(), e))
}
