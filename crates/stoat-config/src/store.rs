//! The authoritative in-process config record.
//!
//! Every mutation goes through [`ConfigStore::update`]: apply to a copy,
//! validate, persist, then commit and announce the changed fields on the
//! event bus. A failed persist leaves the committed record untouched.
//!
//! The store never talks to surfaces. Broadcasting the new state is the
//! caller's job, once per completed operation.

use std::path::{Path, PathBuf};

use stoat_common::{ConfigError, ConfigKey, Event, EventBus};
use tokio::sync::broadcast;
use tracing::debug;

use crate::payload::SettingsPatch;
use crate::schema::{DesktopConfig, Instance, WindowState};
use crate::toml_writer::save_config_to_path;
use crate::validation;

const EVENT_CAPACITY: usize = 64;

pub struct ConfigStore {
    config: DesktopConfig,
    /// `None` keeps everything in memory.
    path: Option<PathBuf>,
    events: EventBus,
}

impl ConfigStore {
    /// Wrap an already loaded config. Nothing is read or written here.
    pub fn new(config: DesktopConfig, path: Option<PathBuf>) -> Self {
        Self {
            config,
            path,
            events: EventBus::new(EVENT_CAPACITY),
        }
    }

    pub fn in_memory(config: DesktopConfig) -> Self {
        Self::new(config, None)
    }

    /// Load (or create) the file at `path` and wrap it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let config = crate::load_config(Some(&path))?;
        Ok(Self::new(config, Some(path)))
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn instances(&self) -> &[Instance] {
        &self.config.instances
    }

    /// Receive `Event::ConfigChanged` for every committed field change.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    /// Apply `f` to a copy of the config and commit it if it validates and
    /// persists. Returns the fields whose value changed.
    pub fn update<F>(&mut self, f: F) -> Result<Vec<ConfigKey>, ConfigError>
    where
        F: FnOnce(&mut DesktopConfig),
    {
        let mut next = self.config.clone();
        f(&mut next);

        let changed = changed_keys(&self.config, &next);
        if changed.is_empty() {
            return Ok(changed);
        }

        validation::validate(&next)?;
        if let Some(path) = &self.path {
            save_config_to_path(&next, path)?;
        }

        self.config = next;
        for key in &changed {
            self.events.publish(Event::ConfigChanged(*key));
        }
        debug!(?changed, "config committed");
        Ok(changed)
    }

    pub fn set_instances(&mut self, instances: Vec<Instance>) -> Result<(), ConfigError> {
        self.update(|c| c.instances = instances).map(drop)
    }

    pub fn set_active_instance_id(&mut self, id: &str) -> Result<(), ConfigError> {
        self.update(|c| c.active_instance_id = id.to_string()).map(drop)
    }

    pub fn set_window_state(&mut self, state: WindowState) -> Result<(), ConfigError> {
        self.update(|c| c.window_state = state).map(drop)
    }

    pub fn set_first_launch(&mut self, value: bool) -> Result<(), ConfigError> {
        self.update(|c| c.first_launch = value).map(drop)
    }

    /// Apply a settings patch posted by a surface.
    pub fn apply_patch(&mut self, patch: &SettingsPatch) -> Result<Vec<ConfigKey>, ConfigError> {
        self.update(|c| {
            patch.apply(c);
        })
    }
}

/// Fields that differ between two configs, in schema order.
pub fn changed_keys(old: &DesktopConfig, new: &DesktopConfig) -> Vec<ConfigKey> {
    let checks = [
        (old.first_launch != new.first_launch, ConfigKey::FirstLaunch),
        (old.custom_frame != new.custom_frame, ConfigKey::CustomFrame),
        (old.minimise_to_tray != new.minimise_to_tray, ConfigKey::MinimiseToTray),
        (
            old.start_minimised_to_tray != new.start_minimised_to_tray,
            ConfigKey::StartMinimisedToTray,
        ),
        (old.spellchecker != new.spellchecker, ConfigKey::Spellchecker),
        (
            old.hardware_acceleration != new.hardware_acceleration,
            ConfigKey::HardwareAcceleration,
        ),
        (old.discord_rpc != new.discord_rpc, ConfigKey::DiscordRpc),
        (old.instances != new.instances, ConfigKey::Instances),
        (
            old.active_instance_id != new.active_instance_id,
            ConfigKey::ActiveInstanceId,
        ),
        (old.window_state != new.window_state, ConfigKey::WindowState),
    ];
    checks
        .into_iter()
        .filter_map(|(differs, key)| differs.then_some(key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn two_instances() -> Vec<Instance> {
        vec![
            Instance::new("a", "A", "https://a.test"),
            Instance::new("b", "B", "https://b.test"),
        ]
    }

    #[test]
    fn update_commits_and_notifies() {
        let mut store = ConfigStore::in_memory(DesktopConfig::default());
        let mut rx = store.subscribe();

        store.set_instances(two_instances()).unwrap();

        assert_eq!(store.instances().len(), 2);
        assert!(matches!(
            rx.try_recv(),
            Ok(Event::ConfigChanged(ConfigKey::Instances))
        ));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn unchanged_update_is_silent() {
        let mut store = ConfigStore::in_memory(DesktopConfig::default());
        let mut rx = store.subscribe();

        let changed = store.update(|c| c.custom_frame = true).unwrap();

        assert!(changed.is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn invalid_update_is_rejected() {
        let mut store = ConfigStore::in_memory(DesktopConfig::default());
        let err = store.set_instances(vec![]).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert_eq!(store.instances().len(), 1);
    }

    #[test]
    fn update_persists_to_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut store = ConfigStore::open(&path).unwrap();

        store.set_instances(two_instances()).unwrap();
        store.set_active_instance_id("b").unwrap();

        let reloaded = crate::load_config(Some(&path)).unwrap();
        assert_eq!(reloaded.instances, two_instances());
        assert_eq!(reloaded.active_instance_id, "b");
    }

    #[test]
    fn persist_failure_leaves_config_untouched() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "file, not dir").unwrap();

        let mut store =
            ConfigStore::new(DesktopConfig::default(), Some(blocker.join("config.toml")));
        let mut rx = store.subscribe();

        let err = store.set_instances(two_instances()).unwrap_err();
        assert!(matches!(err, ConfigError::PersistError(_)));
        assert_eq!(store.config(), &DesktopConfig::default());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn patch_reports_changed_fields_only() {
        let mut store = ConfigStore::in_memory(DesktopConfig::default());
        let patch: SettingsPatch =
            serde_json::from_str(r#"{"customFrame": true, "spellchecker": false}"#).unwrap();

        let changed = store.apply_patch(&patch).unwrap();

        assert_eq!(changed, vec![ConfigKey::Spellchecker]);
        assert!(!store.config().spellchecker);
    }

    #[test]
    fn changed_keys_in_schema_order() {
        let old = DesktopConfig::default();
        let mut new = old.clone();
        new.window_state.x = 10;
        new.first_launch = false;
        assert_eq!(
            changed_keys(&old, &new),
            vec![ConfigKey::FirstLaunch, ConfigKey::WindowState]
        );
    }
}
