//! Shared test utilities for esadmin integration tests.
//!
//! Invariants / Assumptions:
//! - Every command is hermetic: no `.env` loading and no `ESADMIN_*`
//!   variables inherited from the host.
//! - Fixtures come from the client crate and use the index
//!   `esadmin-index-test`.

use assert_cmd::Command;

#[allow(unused_imports)]
pub use esadmin_client::testing::load_fixture;

/// Index name used by every fixture.
#[allow(dead_code)]
pub const INDEX: &str = "esadmin-index-test";

/// Returns a hermetic `esadmin` command.
pub fn esadmin_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("esadmin");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    for var in [
        "ESADMIN_BASE_URL",
        "ESADMIN_USERNAME",
        "ESADMIN_PASSWORD",
        "ESADMIN_API_KEY",
        "ESADMIN_TIMEOUT",
        "ESADMIN_MAX_RETRIES",
        "ESADMIN_SKIP_VERIFY",
        "ESADMIN_INDEX",
        "ESADMIN_OTLP_ENDPOINT",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }

    cmd
}

/// A hermetic command pointed at `base_url` with retries disabled and the
/// test index selected.
#[allow(dead_code)]
pub fn esadmin_cmd_for(base_url: &str) -> Command {
    let mut cmd = esadmin_cmd();
    cmd.env("ESADMIN_BASE_URL", base_url)
        .env("ESADMIN_MAX_RETRIES", "0")
        .env("ESADMIN_INDEX", INDEX);
    cmd
}

/// Path of the test index followed by `suffix`.
#[allow(dead_code)]
pub fn index_path(suffix: &str) -> String {
    format!("/{}{}", INDEX, suffix)
}
