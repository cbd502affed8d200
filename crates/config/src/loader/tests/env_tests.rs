//! Environment variable tests for the configuration loader.

use std::time::Duration;

use crate::loader::builder::ConfigLoader;
use crate::loader::env::{env_var_or_none, parse_bool};
use crate::loader::error::ConfigError;
use crate::types::AuthStrategy;
use serial_test::serial;

use super::{CLEARED_VARS, env_lock};

fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
    let mut all: Vec<(&str, Option<&str>)> = CLEARED_VARS
        .iter()
        .filter(|(key, _)| !vars.iter().any(|(k, _)| k == key))
        .copied()
        .collect();
    all.extend_from_slice(vars);
    temp_env::with_vars(all, f);
}

#[test]
#[serial]
fn test_env_populates_loader() {
    let _lock = env_lock().lock().unwrap();

    with_env(
        &[
            ("ESADMIN_BASE_URL", Some("http://es.example.com:9200")),
            ("ESADMIN_TIMEOUT", Some("45")),
            ("ESADMIN_MAX_RETRIES", Some("5")),
            ("ESADMIN_SKIP_VERIFY", Some("true")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(config.connection.base_url, "http://es.example.com:9200");
            assert_eq!(config.connection.timeout, Duration::from_secs(45));
            assert_eq!(config.connection.max_retries, 5);
            assert!(config.connection.skip_verify);
        },
    );
}

#[test]
#[serial]
fn test_explicit_override_beats_env() {
    let _lock = env_lock().lock().unwrap();

    with_env(
        &[("ESADMIN_BASE_URL", Some("http://from-env:9200"))],
        || {
            let config = ConfigLoader::new()
                .from_env()
                .unwrap()
                .with_base_url("http://from-flag:9200".to_string())
                .build()
                .unwrap();
            assert_eq!(config.connection.base_url, "http://from-flag:9200");
        },
    );
}

#[test]
#[serial]
fn test_empty_env_vars_ignored() {
    let _lock = env_lock().lock().unwrap();

    with_env(
        &[
            ("ESADMIN_BASE_URL", Some("http://localhost:9200")),
            ("ESADMIN_USERNAME", Some("")),
            ("ESADMIN_PASSWORD", Some("   ")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert!(matches!(config.auth.strategy, AuthStrategy::Anonymous));
        },
    );
}

#[test]
#[serial]
fn test_invalid_timeout_env() {
    let _lock = env_lock().lock().unwrap();

    with_env(&[("ESADMIN_TIMEOUT", Some("soon"))], || {
        let result = ConfigLoader::new().from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "ESADMIN_TIMEOUT"),
            other => panic!("expected InvalidValue, got {:?}", other.err()),
        }
    });
}

#[test]
#[serial]
fn test_max_retries_env_out_of_range() {
    let _lock = env_lock().lock().unwrap();

    with_env(&[("ESADMIN_MAX_RETRIES", Some("99"))], || {
        let result = ConfigLoader::new().from_env();
        assert!(matches!(result, Err(ConfigError::InvalidMaxRetries { .. })));
    });
}

#[test]
#[serial]
fn test_env_var_or_none_trims() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var("ESADMIN_TEST_TRIM", Some("  value  "), || {
        assert_eq!(env_var_or_none("ESADMIN_TEST_TRIM"), Some("value".to_string()));
    });
    temp_env::with_var("ESADMIN_TEST_TRIM", None::<&str>, || {
        assert_eq!(env_var_or_none("ESADMIN_TEST_TRIM"), None);
    });
}

#[test]
fn test_parse_bool_spellings() {
    assert!(parse_bool("X", "yes").unwrap());
    assert!(parse_bool("X", "TRUE").unwrap());
    assert!(!parse_bool("X", "0").unwrap());
    assert!(parse_bool("X", "maybe").is_err());
}
