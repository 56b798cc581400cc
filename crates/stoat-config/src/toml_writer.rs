//! Write DesktopConfig to TOML on disk.
//!
//! Writes are atomic (write to `.tmp`, then rename) so a crash mid-write
//! leaves the previous file intact.

use std::path::Path;

use stoat_common::ConfigError;

use crate::schema::DesktopConfig;
use crate::toml_loader::default_config_path;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Write config to the platform default path.
pub fn save_config(config: &DesktopConfig) -> Result<(), ConfigError> {
    let path = default_config_path()?;
    save_config_to_path(config, &path)
}

/// Write config to a specific path.
///
/// Creates parent directories if they don't exist.
pub fn save_config_to_path(config: &DesktopConfig, path: &Path) -> Result<(), ConfigError> {
    let toml_str = toml::to_string_pretty(config).map_err(|e| {
        ConfigError::PersistError(format!("failed to serialize config to TOML: {e}"))
    })?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::PersistError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, &toml_str).map_err(|e| {
        ConfigError::PersistError(format!(
            "failed to write config to {}: {e}",
            tmp_path.display()
        ))
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Rename over an open file fails on Windows.
        tracing::warn!("atomic rename failed ({}), falling back to direct write", e);
        let _ = std::fs::remove_file(&tmp_path);
        std::fs::write(path, &toml_str).map_err(|e2| {
            ConfigError::PersistError(format!(
                "failed to write config to {}: {e2}",
                path.display()
            ))
        })?;
    }

    tracing::debug!(path = %path.display(), "config saved to disk");
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Instance;
    use tempfile::TempDir;

    #[test]
    fn save_config_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = DesktopConfig::default();
        config.instances.push(Instance::new("instance-1", "Work", "https://work.test"));
        config.active_instance_id = "instance-1".into();
        config.window_state.width = 1280;
        config.window_state.height = 720;
        save_config_to_path(&config, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: DesktopConfig = toml::from_str(&contents).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn save_config_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deep").join("config.toml");

        save_config_to_path(&DesktopConfig::default(), &path).unwrap();

        assert!(path.exists());
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("beta.revolt.chat"));
    }

    #[test]
    fn save_config_cleans_up_tmp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        save_config_to_path(&DesktopConfig::default(), &path).unwrap();

        let tmp_path = path.with_extension("toml.tmp");
        assert!(
            !tmp_path.exists(),
            "tmp file should be cleaned up after rename"
        );
    }

    #[test]
    fn save_config_reports_persist_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let path = blocker.join("config.toml");

        let err = save_config_to_path(&DesktopConfig::default(), &path).unwrap_err();
        assert!(matches!(err, ConfigError::PersistError(_)));
    }
}
