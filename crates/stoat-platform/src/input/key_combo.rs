use crate::key_names::normalize_key_name;
use crate::keymap::{KeyBind, Modifier};

pub(super) const MOD_CTRL: u8 = 0b0001;
pub(super) const MOD_ALT: u8 = 0b0010;
pub(super) const MOD_SHIFT: u8 = 0b0100;
pub(super) const MOD_SUPER: u8 = 0b1000;

/// A canonical key representation for HashMap lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Bitmask: Ctrl=1, Alt=2, Shift=4, Super=8.
    pub mods: u8,
    /// Normalized key name (e.g. "1", "Tab", "F5").
    pub key: String,
}

impl KeyCombo {
    pub fn from_keybind(kb: &KeyBind) -> Self {
        let mut mods = 0u8;
        for m in &kb.modifiers {
            mods |= match m {
                Modifier::Ctrl => MOD_CTRL,
                Modifier::Alt => MOD_ALT,
                Modifier::Shift => MOD_SHIFT,
                Modifier::Super => MOD_SUPER,
            };
        }
        Self {
            mods,
            key: kb.key.clone(),
        }
    }

    /// Build from raw modifier state and an unnormalized key name, as
    /// reported by winit or a DOM `keydown` event.
    pub fn from_parts(ctrl: bool, alt: bool, shift: bool, super_key: bool, key: &str) -> Self {
        let mut mods = 0u8;
        for (held, bit) in [
            (ctrl, MOD_CTRL),
            (alt, MOD_ALT),
            (shift, MOD_SHIFT),
            (super_key, MOD_SUPER),
        ] {
            if held {
                mods |= bit;
            }
        }
        Self {
            mods,
            key: normalize_key_name(key),
        }
    }

    pub fn has(&self, bit: u8) -> bool {
        self.mods & bit != 0
    }

    /// The same combo with Shift released.
    pub(super) fn without_shift(&self) -> Self {
        Self {
            mods: self.mods & !MOD_SHIFT,
            key: self.key.clone(),
        }
    }
}
