//! Stoat desktop configuration.
//!
//! A single TOML file holds the instance list, the active selection, the
//! shell flags and the last window geometry. Every section has defaults so
//! a partial (or missing) file still yields a usable config.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stoat_config::{config_to_json, load_config};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod payload;
pub mod schema;
pub mod store;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use payload::{ConfigPayload, InstancesSnapshot, SettingsPatch};
pub use schema::{DesktopConfig, Instance, WindowState, CONFIG_SCHEMA_VERSION};
pub use store::ConfigStore;
pub use toml_writer::{save_config, save_config_to_path};
pub use validation::normalize_instance_input;

use std::path::Path;

use stoat_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// A missing file is created with the documented default template. The
/// result is repaired (see [`validation::repair`]) and then validated.
pub fn load_config(path: Option<&Path>) -> Result<DesktopConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_or_create(path)?,
        None => toml_loader::load_default()?,
    };

    for fix in validation::repair(&mut config) {
        tracing::warn!("config repaired: {fix}");
    }

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to the pretty-printed camelCase JSON surfaces receive.
pub fn config_to_json(config: &DesktopConfig) -> String {
    serde_json::to_string_pretty(&ConfigPayload::from(config))
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_uses_wire_names() {
        let json = config_to_json(&DesktopConfig::default());
        assert!(json.contains("\"activeInstanceId\": \"default\""));
        assert!(json.contains("\"minimiseToTray\": true"));
        assert!(json.contains("\"isMaximised\": false"));
        assert!(!json.contains("active_instance_id"));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stoat").join("config.toml");

        let config = load_config(Some(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(config.instances.len(), 1);
        assert_eq!(config.active_instance_id, "default");
    }

    #[test]
    fn load_config_repairs_empty_instance_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "instances = []\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.instances, schema::default_instances());
    }
}
