//! Tests for validation and repair.

use super::*;
use crate::schema::Instance;

#[test]
fn default_config_validates() {
    assert!(validate(&DesktopConfig::default()).is_ok());
}

#[test]
fn catches_empty_instance_list() {
    let config = DesktopConfig {
        instances: vec![],
        ..Default::default()
    };
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("at least one"));
}

#[test]
fn catches_duplicate_ids() {
    let config = DesktopConfig {
        instances: vec![
            Instance::new("a", "A", "https://a.test"),
            Instance::new("a", "Again", "https://b.test"),
        ],
        ..Default::default()
    };
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("duplicate instance id 'a'"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = DesktopConfig {
        instances: vec![Instance::new(" ", "", "https://a.test")],
        ..Default::default()
    };
    config.window_state.width = 100_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("instances[0].id"));
    assert!(err.contains("instances[0].label"));
    assert!(err.contains("window_state.width"));
}

#[test]
fn repair_drops_duplicates_and_blank_ids() {
    let mut config = DesktopConfig {
        instances: vec![
            Instance::new("a", "A", "https://a.test"),
            Instance::new("", "Blank", "https://b.test"),
            Instance::new("a", "Dup", "https://c.test"),
            Instance::new("b", "B", "https://d.test"),
        ],
        ..Default::default()
    };
    let fixes = repair(&mut config);
    assert_eq!(fixes.len(), 2);
    let ids: Vec<_> = config.instance_ids().collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(config.instances[0].label, "A");
    assert!(validate(&config).is_ok());
}

#[test]
fn repair_restores_default_instances() {
    let mut config = DesktopConfig {
        instances: vec![],
        ..Default::default()
    };
    let fixes = repair(&mut config);
    assert_eq!(fixes.len(), 1);
    assert_eq!(config.instances, default_instances());
}

#[test]
fn repair_resets_absurd_window_size() {
    let mut config = DesktopConfig::default();
    config.window_state.width = 1_000_000;
    config.window_state.height = 600;
    repair(&mut config);
    assert_eq!(config.window_state.width, 0);
    assert_eq!(config.window_state.height, 0);
}

#[test]
fn repair_leaves_valid_config_alone() {
    let mut config = DesktopConfig::default();
    assert!(repair(&mut config).is_empty());
    assert_eq!(config, DesktopConfig::default());
}

#[test]
fn normalize_trims_and_adds_scheme() {
    let (label, url) = normalize_instance_input("  Work  ", " chat.example.com ").unwrap();
    assert_eq!(label, "Work");
    assert_eq!(url, "https://chat.example.com");
}

#[test]
fn normalize_keeps_http() {
    let (_, url) = normalize_instance_input("Local", "http://localhost:5173/app").unwrap();
    assert_eq!(url, "http://localhost:5173/app");
}

#[test]
fn normalize_rejects_blank_fields() {
    let err = normalize_instance_input("   ", "https://x.test").unwrap_err();
    assert!(err.to_string().contains("label"));

    let err = normalize_instance_input("X", "  ").unwrap_err();
    assert!(err.to_string().contains("url"));
}

#[test]
fn normalize_rejects_unparsable_url() {
    let err = normalize_instance_input("X", "https://exa mple.com").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
}
