// Environment variables are process-wide, so every case runs inside one test.
use keypad_core::config::CONFIG_ENV_VAR;
use keypad_core::{AdapterConfig, ConfigError};
use std::io::Write;

#[test]
fn env_config_errors_are_reported_before_falling_back() {
    std::env::remove_var(CONFIG_ENV_VAR);
    let mut report = Vec::new();
    assert_eq!(AdapterConfig::from_env_or_report(&mut report), AdapterConfig::default());
    assert!(report.is_empty());

    let mut bad = tempfile::NamedTempFile::new().unwrap();
    write!(bad, r#"{{"max_display":"ten"}}"#).unwrap();
    std::env::set_var(CONFIG_ENV_VAR, bad.path());

    assert!(matches!(AdapterConfig::try_from_env(), Err(ConfigError::Parse { .. })));
    let config = AdapterConfig::from_env_or_report(&mut report);
    assert_eq!(config, AdapterConfig::default());
    let shown = String::from_utf8(report).unwrap();
    assert!(shown.starts_with("[WARN] Config ignored"), "{shown}");
    assert!(shown.contains("malformed config"), "{shown}");
    assert!(shown.contains(&bad.path().display().to_string()), "{shown}");

    let missing = tempfile::tempdir().unwrap().path().join("gone.json");
    std::env::set_var(CONFIG_ENV_VAR, &missing);
    let mut report = Vec::new();
    AdapterConfig::from_env_or_report(&mut report);
    assert!(String::from_utf8(report).unwrap().contains("failed to read config"));

    let mut good = tempfile::NamedTempFile::new().unwrap();
    write!(good, r#"{{"max_display": 10}}"#).unwrap();
    std::env::set_var(CONFIG_ENV_VAR, good.path());
    let mut report = Vec::new();
    assert_eq!(AdapterConfig::from_env_or_report(&mut report).max_display, Some(10));
    assert!(report.is_empty());

    std::env::remove_var(CONFIG_ENV_VAR);
}
