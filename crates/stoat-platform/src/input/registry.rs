use std::collections::HashMap;

use stoat_common::Action;

use crate::keymap::parse_keybind;

use super::key_combo::{KeyCombo, MOD_SHIFT};

/// Maps key combinations to [`Action`]s.
#[derive(Debug, Default)]
pub struct KeybindRegistry {
    bindings: HashMap<KeyCombo, Action>,
}

impl KeybindRegistry {
    /// Build from `(accelerator, action)` pairs. Invalid accelerators are
    /// logged and skipped.
    pub fn from_bindings<'a>(pairs: impl IntoIterator<Item = (&'a str, Action)>) -> Self {
        let mut bindings = HashMap::new();
        for (accelerator, action) in pairs {
            match parse_keybind(accelerator) {
                Ok(kb) => {
                    bindings.insert(KeyCombo::from_keybind(&kb), action);
                }
                Err(e) => {
                    tracing::warn!("invalid keybind '{accelerator}': {e}");
                }
            }
        }
        Self { bindings }
    }

    /// Instance switching: primary+1..9 selects by position, primary+Tab
    /// and primary+Shift+Tab cycle.
    pub fn instance_shortcuts() -> Self {
        let digits: Vec<String> = (1..=9).map(|n| format!("CommandOrControl+{n}")).collect();
        let mut pairs: Vec<(&str, Action)> = digits
            .iter()
            .zip(1u32..)
            .map(|(accel, n)| (accel.as_str(), Action::SelectInstance(n)))
            .collect();
        pairs.push(("CommandOrControl+Tab", Action::NextInstance));
        pairs.push(("CommandOrControl+Shift+Tab", Action::PrevInstance));
        Self::from_bindings(pairs)
    }

    /// App-wide keys handled while any app window has focus.
    pub fn app_keys() -> Self {
        Self::from_bindings([("CommandOrControl+Q", Action::Quit)])
    }

    /// Keys every content surface intercepts: zoom and reload.
    pub fn surface_keys() -> Self {
        Self::from_bindings([
            ("CommandOrControl+=", Action::ZoomIn),
            ("CommandOrControl+Plus", Action::ZoomIn),
            ("CommandOrControl+-", Action::ZoomOut),
            ("CommandOrControl+0", Action::ZoomReset),
            ("CommandOrControl+R", Action::Reload),
            ("F5", Action::Reload),
        ])
    }

    /// Look up an action for a key combination.
    ///
    /// Shift is ignored as a fallback for keys whose shifted glyph is the
    /// key itself (`+` is Shift+`=` on most layouts).
    pub fn lookup(&self, combo: &KeyCombo) -> Option<&Action> {
        self.bindings.get(combo).or_else(|| {
            if combo.has(MOD_SHIFT) && !combo.key.chars().all(char::is_alphanumeric) {
                self.bindings.get(&combo.without_shift())
            } else {
                None
            }
        })
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Shortcuts that only fire while the main window has focus.
///
/// Call [`register`](Self::register) on focus gain and
/// [`unregister`](Self::unregister) on focus loss and at shutdown.
#[derive(Debug)]
pub struct FocusShortcuts {
    registry: KeybindRegistry,
    registered: bool,
}

impl FocusShortcuts {
    pub fn new(registry: KeybindRegistry) -> Self {
        Self {
            registry,
            registered: false,
        }
    }

    pub fn register(&mut self) {
        if !self.registered {
            tracing::debug!(count = self.registry.len(), "shortcuts registered");
        }
        self.registered = true;
    }

    pub fn unregister(&mut self) {
        if self.registered {
            tracing::debug!("shortcuts unregistered");
        }
        self.registered = false;
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Resolve a combo; nothing matches while unregistered.
    pub fn lookup(&self, combo: &KeyCombo) -> Option<Action> {
        if !self.registered {
            return None;
        }
        self.registry.lookup(combo).cloned()
    }
}
