//! Fan-out of the current state to surfaces, and settings updates.

use serde_json::Value;
use stoat_common::{ConfigKey, SurfaceId};
use stoat_config::{ConfigPayload, InstancesSnapshot, SettingsPatch, WindowState};
use tracing::warn;

use crate::host::{SurfaceHost, CHANNEL_CONFIG, CHANNEL_INSTANCES_CHANGED, CHANNEL_INSTANCE_ERROR};
use crate::layout::ChromeMode;

use super::types::log_host_error;
use super::{ViewError, ViewManager};

impl<H: SurfaceHost> ViewManager<H> {
    pub fn snapshot(&self) -> InstancesSnapshot {
        InstancesSnapshot {
            instances: self.store.instances().to_vec(),
            active_instance_id: self.active.clone().unwrap_or_default(),
        }
    }

    /// Send the full config to every content surface and the instances
    /// snapshot to the sidebar and the dialog.
    pub fn sync(&mut self) {
        if self.shutting_down {
            return;
        }
        let config = match serde_json::to_value(ConfigPayload::from(self.store.config())) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "failed to serialize config");
                return;
            }
        };
        let snapshot = match serde_json::to_value(self.snapshot()) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "failed to serialize instances snapshot");
                return;
            }
        };

        for (_, surface) in self.ordered_surfaces() {
            self.send_quietly(surface, CHANNEL_CONFIG, &config);
        }
        for surface in self.sidebar.into_iter().chain(self.dialog) {
            self.send_quietly(surface, CHANNEL_INSTANCES_CHANGED, &snapshot);
        }
    }

    /// Send the snapshot to one surface, for `get_instances` requests.
    pub fn send_snapshot(&mut self, surface: SurfaceId) {
        match serde_json::to_value(self.snapshot()) {
            Ok(snapshot) => self.send_quietly(surface, CHANNEL_INSTANCES_CHANGED, &snapshot),
            Err(e) => warn!(error = %e, "failed to serialize instances snapshot"),
        }
    }

    /// Send the config to one surface.
    pub fn send_config(&mut self, surface: SurfaceId) {
        match serde_json::to_value(ConfigPayload::from(self.store.config())) {
            Ok(config) => self.send_quietly(surface, CHANNEL_CONFIG, &config),
            Err(e) => warn!(error = %e, "failed to serialize config"),
        }
    }

    /// Report an add/edit failure to the dialog, if one is open.
    pub fn report_dialog_error(&mut self, message: &str) {
        if let Some(dialog) = self.dialog {
            self.send_quietly(dialog, CHANNEL_INSTANCE_ERROR, &Value::from(message));
        }
    }

    /// Persist a settings patch and broadcast if anything changed.
    pub fn update_settings(&mut self, patch: &SettingsPatch) -> Result<Vec<ConfigKey>, ViewError> {
        if self.shutting_down || patch.is_empty() {
            return Ok(Vec::new());
        }
        let changed = self.store.apply_patch(patch)?;
        if changed.contains(&ConfigKey::CustomFrame) {
            self.set_chrome(ChromeMode::from_custom_frame(self.store.config().custom_frame));
        }
        if !changed.is_empty() {
            self.sync();
        }
        Ok(changed)
    }

    /// Persist window geometry and broadcast it. Failures are logged,
    /// never returned.
    pub fn save_window_state(&mut self, state: WindowState) -> bool {
        if self.shutting_down {
            return false;
        }
        match self.store.set_window_state(state) {
            Ok(()) => {
                self.sync();
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to persist window state");
                false
            }
        }
    }

    pub fn set_first_launch(&mut self, value: bool) {
        if self.shutting_down {
            return;
        }
        match self.store.set_first_launch(value) {
            Ok(()) => self.sync(),
            Err(e) => warn!(error = %e, "failed to persist first launch flag"),
        }
    }

    pub(super) fn send_quietly(&mut self, surface: SurfaceId, channel: &str, payload: &Value) {
        if let Err(e) = self.host.send(surface, channel, payload) {
            log_host_error(channel, surface, &e);
        }
    }
}
