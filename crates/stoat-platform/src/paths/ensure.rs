use std::fs;

use stoat_common::PlatformError;

use super::resolve::{config_dir, crash_report_dir, data_dir, log_dir};

/// Create every app directory that does not exist yet.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    for dir in [config_dir()?, data_dir()?, log_dir()?, crash_report_dir()?] {
        fs::create_dir_all(&dir)
            .map_err(|e| PlatformError::PathError(format!("{}: {e}", dir.display())))?;
    }
    Ok(())
}
