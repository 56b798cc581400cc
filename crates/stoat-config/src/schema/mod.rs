//! Configuration schema types for the Stoat desktop shell.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Field names are snake_case on disk; see [`crate::payload`] for the
//! camelCase shape sent to surfaces.

mod instance;
mod window;

pub use instance::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Scalars come before the `[window_state]` and `[[instances]]` tables so
/// the record serializes to valid TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub first_launch: bool,
    /// Draw the sidebar/titlebar surface instead of native decorations.
    pub custom_frame: bool,
    /// Closing the main window hides it instead of quitting.
    pub minimise_to_tray: bool,
    pub start_minimised_to_tray: bool,
    pub spellchecker: bool,
    /// Read once at startup.
    pub hardware_acceleration: bool,
    /// Rich presence integration flag. Stored and broadcast only.
    pub discord_rpc: bool,
    pub active_instance_id: String,
    pub window_state: WindowState,
    pub instances: Vec<Instance>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            first_launch: true,
            custom_frame: true,
            minimise_to_tray: true,
            start_minimised_to_tray: false,
            spellchecker: true,
            hardware_acceleration: true,
            discord_rpc: true,
            active_instance_id: DEFAULT_INSTANCE_ID.into(),
            window_state: WindowState::default(),
            instances: default_instances(),
        }
    }
}

impl DesktopConfig {
    pub fn instance(&self, id: &str) -> Option<&Instance> {
        self.instances.iter().find(|i| i.id == id)
    }

    pub fn has_instance(&self, id: &str) -> bool {
        self.instance(id).is_some()
    }

    pub fn instance_ids(&self) -> impl Iterator<Item = &str> {
        self.instances.iter().map(|i| i.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_run_shell() {
        let config = DesktopConfig::default();
        assert!(config.first_launch);
        assert!(config.custom_frame);
        assert!(config.minimise_to_tray);
        assert!(!config.start_minimised_to_tray);
        assert!(config.spellchecker);
        assert!(config.hardware_acceleration);
        assert!(config.discord_rpc);
        assert_eq!(config.active_instance_id, "default");
        assert_eq!(config.instances.len(), 1);
        assert_eq!(config.instances[0].url, "https://beta.revolt.chat");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: DesktopConfig = toml::from_str(
            r#"
minimise_to_tray = false

[[instances]]
id = "a"
label = "A"
url = "https://a.test"
"#,
        )
        .unwrap();
        assert!(!config.minimise_to_tray);
        assert!(config.custom_frame);
        assert_eq!(config.instances.len(), 1);
        assert_eq!(config.instances[0].id, "a");
        assert_eq!(config.active_instance_id, "default");
    }

    #[test]
    fn default_config_serializes_to_toml() {
        let config = DesktopConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("[[instances]]"));
        assert!(text.contains("[window_state]"));
        let parsed: DesktopConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn instance_lookup() {
        let config = DesktopConfig::default();
        assert!(config.has_instance("default"));
        assert!(!config.has_instance("missing"));
        assert_eq!(config.instance_ids().collect::<Vec<_>>(), vec!["default"]);
    }
}
