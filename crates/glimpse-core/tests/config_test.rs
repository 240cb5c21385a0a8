use std::collections::HashMap;

use glimpse_core::config::*;
use glimpse_core::errors::{ConfigError, GlimpseError};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = TrackerConfig::from_toml("").unwrap();

    assert_eq!(config.batch_size, 10);
    assert_eq!(config.flush_interval_ms, 5_000);
    assert_eq!(config.max_retries, 3);
    assert_eq!(config.retry_base_delay_ms, 1_000);
    assert_eq!(config.max_queue_depth, 1_000);
    assert_eq!(config.session_timeout_mins, 30);
    assert_eq!(config.engagement_secs, 30);
    assert_eq!(config.scroll_throttle_ms, 200);
    assert!(!config.debug);
    assert!(config.client_id.is_empty());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
client_id = "tenant_0001"
debug = true
flush_interval_ms = 1000
"#;
    let config = TrackerConfig::from_toml(toml).unwrap();
    assert_eq!(config.client_id, "tenant_0001");
    assert!(config.debug);
    assert_eq!(config.flush_interval_ms, 1_000);
    // Non-overridden fields keep defaults
    assert_eq!(config.batch_size, 10);
    assert_eq!(config.max_retries, 3);
}

#[test]
fn config_rejects_malformed_toml() {
    let err = TrackerConfig::from_toml("batch_size = \"ten\"").unwrap_err();
    assert!(matches!(
        err,
        GlimpseError::Config(ConfigError::ParseFailed { .. })
    ));
}

#[test]
fn config_serde_roundtrip() {
    let config = TrackerConfig {
        client_id: "tenant_0001".into(),
        ..TrackerConfig::default()
    };
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = TrackerConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.client_id, config.client_id);
    assert_eq!(roundtripped.batch_size, config.batch_size);
}

// ── Bootstrap attributes ─────────────────────────────────────────────────

fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn bootstrap_reads_client_id_and_debug() {
    let raw = attrs(&[("data-client-id", "tenant_0001"), ("data-debug", "TRUE")]);
    let boot = BootstrapAttributes::from_attributes("https://cdn.example.com/t/g.js", &raw);
    let config = TrackerConfig::from_bootstrap(&boot).unwrap();

    assert_eq!(config.client_id, "tenant_0001");
    assert!(config.debug);
    assert_eq!(config.endpoint, "https://cdn.example.com/t/g.js");
}

#[test]
fn bootstrap_debug_is_off_unless_true() {
    for value in ["false", "1", "yes", ""] {
        let raw = attrs(&[("data-client-id", "tenant_0001"), ("data-debug", value)]);
        let boot = BootstrapAttributes::from_attributes("https://cdn.example.com/g.js", &raw);
        assert!(!boot.debug_enabled(), "data-debug={value:?} must not enable debug");
    }
}

#[test]
fn bootstrap_without_client_id_fails() {
    let boot = BootstrapAttributes::from_attributes("https://cdn.example.com/g.js", &attrs(&[]));
    let err = TrackerConfig::from_bootstrap(&boot).unwrap_err();
    assert!(matches!(
        err,
        GlimpseError::Config(ConfigError::MissingClientId)
    ));

    let blank = attrs(&[("data-client-id", "   ")]);
    let boot = BootstrapAttributes::from_attributes("https://cdn.example.com/g.js", &blank);
    assert!(TrackerConfig::from_bootstrap(&boot).is_err());
}

// ── Session window ───────────────────────────────────────────────────────

#[test]
fn default_session_window_is_thirty_minutes() {
    let timeout = TrackerConfig::default().session_timeout().unwrap();
    assert_eq!(timeout, chrono::Duration::minutes(30));
}

#[test]
fn unrepresentable_session_window_is_rejected() {
    let config = TrackerConfig::from_toml("session_timeout_mins = 9223372036854775807").unwrap();
    assert!(matches!(
        config.session_timeout(),
        Err(ConfigError::InvalidValue {
            field: "session_timeout_mins",
            ..
        })
    ));
}

#[test]
fn non_positive_session_window_is_rejected() {
    for mins in [0, -5] {
        let config = TrackerConfig {
            session_timeout_mins: mins,
            ..TrackerConfig::default()
        };
        assert!(config.session_timeout().is_err(), "{mins} minutes must be rejected");
    }
}
