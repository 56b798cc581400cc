//! Core TOML config loading: read from path or platform default.

use crate::schema::DesktopConfig;
use crate::validation;
use std::path::Path;
use stoat_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. Validation problems are
/// logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<DesktopConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: DesktopConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!(path = %path.display(), instances = config.instances.len(), "loaded config");
    Ok(config)
}

/// Load `path`, writing the default template there first if it is missing.
pub fn load_or_create(path: &Path) -> Result<DesktopConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(path)?;
            Ok(DesktopConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/stoat-desktop/config.toml`
/// On Linux: `~/.config/stoat-desktop/config.toml`
/// On Windows: `%APPDATA%\stoat-desktop\config.toml`
pub fn load_default() -> Result<DesktopConfig, ConfigError> {
    let path = default_config_path()?;
    load_or_create(&path)
}
