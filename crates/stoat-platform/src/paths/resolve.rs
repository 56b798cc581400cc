use std::path::PathBuf;

use stoat_common::PlatformError;

/// Directory name used under every platform base directory.
pub const APP_NAME: &str = "stoat-desktop";

/// Platform configuration directory.
///
/// - macOS: `~/Library/Application Support/stoat-desktop`
/// - Linux: `$XDG_CONFIG_HOME/stoat-desktop` (defaults to `~/.config/stoat-desktop`)
/// - Windows: `%APPDATA%\stoat-desktop`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Platform data directory.
///
/// - macOS: `~/Library/Application Support/stoat-desktop`
/// - Linux: `$XDG_DATA_HOME/stoat-desktop` (defaults to `~/.local/share/stoat-desktop`)
/// - Windows: `%APPDATA%\stoat-desktop`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// `config_dir()/config.toml`
pub fn config_file() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join("config.toml"))
}

/// `data_dir()/logs`
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// `log_dir()/crash-reports`
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}
