//! Wire shapes exchanged with surfaces.
//!
//! Surfaces speak camelCase JSON. These types borrow from (or patch) a
//! [`DesktopConfig`] without changing how it is stored on disk.

use serde::{Deserialize, Serialize};
use stoat_common::ConfigKey;

use crate::schema::{DesktopConfig, Instance, WindowState};

/// The full config as broadcast on the `config` channel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPayload<'a> {
    pub first_launch: bool,
    pub custom_frame: bool,
    pub minimise_to_tray: bool,
    pub start_minimised_to_tray: bool,
    pub spellchecker: bool,
    pub hardware_acceleration: bool,
    pub discord_rpc: bool,
    pub instances: &'a [Instance],
    pub active_instance_id: &'a str,
    pub window_state: WindowStatePayload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowStatePayload {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub is_maximised: bool,
}

impl From<WindowState> for WindowStatePayload {
    fn from(s: WindowState) -> Self {
        Self {
            x: s.x,
            y: s.y,
            width: s.width,
            height: s.height,
            is_maximised: s.is_maximised,
        }
    }
}

impl From<WindowStatePayload> for WindowState {
    fn from(p: WindowStatePayload) -> Self {
        Self {
            x: p.x,
            y: p.y,
            width: p.width,
            height: p.height,
            is_maximised: p.is_maximised,
        }
    }
}

impl<'a> From<&'a DesktopConfig> for ConfigPayload<'a> {
    fn from(c: &'a DesktopConfig) -> Self {
        Self {
            first_launch: c.first_launch,
            custom_frame: c.custom_frame,
            minimise_to_tray: c.minimise_to_tray,
            start_minimised_to_tray: c.start_minimised_to_tray,
            spellchecker: c.spellchecker,
            hardware_acceleration: c.hardware_acceleration,
            discord_rpc: c.discord_rpc,
            instances: &c.instances,
            active_instance_id: &c.active_instance_id,
            window_state: c.window_state.into(),
        }
    }
}

/// Payload of `instances-changed`, sent to the sidebar and the dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstancesSnapshot {
    pub instances: Vec<Instance>,
    /// Empty when nothing is selected.
    pub active_instance_id: String,
}

/// A partial settings update posted by a content surface.
///
/// The instance list and the active selection are owned by the view
/// registry and cannot be changed through a patch; unknown or unsupported
/// keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub first_launch: Option<bool>,
    pub custom_frame: Option<bool>,
    pub minimise_to_tray: Option<bool>,
    pub start_minimised_to_tray: Option<bool>,
    pub spellchecker: Option<bool>,
    pub hardware_acceleration: Option<bool>,
    pub discord_rpc: Option<bool>,
    pub window_state: Option<WindowStatePayload>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        *self == SettingsPatch::default()
    }

    /// Write the set fields into `config`, returning the keys that were set.
    pub fn apply(&self, config: &mut DesktopConfig) -> Vec<ConfigKey> {
        let mut keys = Vec::new();
        let flags = [
            (self.first_launch, &mut config.first_launch, ConfigKey::FirstLaunch),
            (self.custom_frame, &mut config.custom_frame, ConfigKey::CustomFrame),
            (
                self.minimise_to_tray,
                &mut config.minimise_to_tray,
                ConfigKey::MinimiseToTray,
            ),
            (
                self.start_minimised_to_tray,
                &mut config.start_minimised_to_tray,
                ConfigKey::StartMinimisedToTray,
            ),
            (self.spellchecker, &mut config.spellchecker, ConfigKey::Spellchecker),
            (
                self.hardware_acceleration,
                &mut config.hardware_acceleration,
                ConfigKey::HardwareAcceleration,
            ),
            (self.discord_rpc, &mut config.discord_rpc, ConfigKey::DiscordRpc),
        ];
        for (value, slot, key) in flags {
            if let Some(value) = value {
                *slot = value;
                keys.push(key);
            }
        }
        if let Some(state) = self.window_state {
            config.window_state = state.into();
            keys.push(ConfigKey::WindowState);
        }
        keys
    }
}
