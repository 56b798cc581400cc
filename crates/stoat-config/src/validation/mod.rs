//! Configuration validation.
//!
//! `validate` collects every problem into a single `ConfigError`;
//! `repair` fixes the problems a hand-edited file can introduce and
//! reports what it changed.

mod helpers;
mod instances;

#[cfg(test)]
mod tests;

pub use instances::normalize_instance_input;

use std::collections::HashSet;

use crate::schema::{default_instances, DesktopConfig};
use stoat_common::ConfigError;

use helpers::validate_range;

/// Largest window dimension accepted from disk.
const MAX_WINDOW_DIMENSION: u32 = 32_768;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DesktopConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    instances::validate_instances(&mut errors, config);

    let ws = &config.window_state;
    validate_range(&mut errors, "window_state.width", ws.width, 0, MAX_WINDOW_DIMENSION);
    validate_range(&mut errors, "window_state.height", ws.height, 0, MAX_WINDOW_DIMENSION);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Fix what can be fixed without user input. Returns one line per fix.
///
/// An empty instance list is replaced by the default list, instances with
/// a blank or duplicate id are dropped, and out-of-range window sizes are
/// reset. An active id that no longer resolves is left alone; the view
/// registry falls back to the first instance.
pub fn repair(config: &mut DesktopConfig) -> Vec<String> {
    let mut fixes = Vec::new();

    let mut seen = HashSet::new();
    config.instances.retain(|instance| {
        let id = instance.id.trim();
        if id.is_empty() {
            fixes.push(format!("dropped instance '{}' with blank id", instance.label));
            return false;
        }
        if !seen.insert(id.to_string()) {
            fixes.push(format!("dropped duplicate instance id '{id}'"));
            return false;
        }
        true
    });

    if config.instances.is_empty() {
        fixes.push("instance list was empty; restored the default instance".into());
        config.instances = default_instances();
    }

    let ws = &mut config.window_state;
    if ws.width > MAX_WINDOW_DIMENSION || ws.height > MAX_WINDOW_DIMENSION {
        fixes.push(format!(
            "window size {}x{} out of range; reset",
            ws.width, ws.height
        ));
        ws.width = 0;
        ws.height = 0;
    }

    fixes
}
