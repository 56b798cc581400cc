//! Keybind registries: accelerator strings resolved to [`Action`]s.
//!
//! [`Action`]: stoat_common::Action

mod key_combo;
mod registry;

pub use key_combo::KeyCombo;
pub use registry::{FocusShortcuts, KeybindRegistry};

#[cfg(test)]
mod tests {
    use super::key_combo::*;
    use super::*;
    use crate::keymap::{parse_keybind, primary_modifier, Modifier};
    use stoat_common::Action;

    fn primary(key: &str) -> KeyCombo {
        let is_super = primary_modifier() == Modifier::Super;
        KeyCombo::from_parts(!is_super, false, false, is_super, key)
    }

    #[test]
    fn keycombo_from_parts_normalizes_key() {
        let combo = KeyCombo::from_parts(true, false, true, false, "tab");
        assert_eq!(combo.mods, MOD_CTRL | MOD_SHIFT);
        assert_eq!(combo.key, "Tab");
    }

    #[test]
    fn keycombo_matches_parsed_accelerator() {
        let a = KeyCombo::from_parts(true, false, false, false, "g");
        let b = KeyCombo::from_keybind(&parse_keybind("Ctrl+G").unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn instance_shortcuts_cover_digits_and_cycling() {
        let registry = KeybindRegistry::instance_shortcuts();
        assert_eq!(registry.len(), 11);
        assert_eq!(
            registry.lookup(&primary("1")),
            Some(&Action::SelectInstance(1))
        );
        assert_eq!(
            registry.lookup(&primary("9")),
            Some(&Action::SelectInstance(9))
        );
        assert_eq!(registry.lookup(&primary("Tab")), Some(&Action::NextInstance));
        assert_eq!(registry.lookup(&primary("0")), None);
    }

    #[test]
    fn shift_tab_cycles_backwards() {
        let registry = KeybindRegistry::instance_shortcuts();
        let mut combo = primary("Tab");
        combo.mods |= MOD_SHIFT;
        assert_eq!(registry.lookup(&combo), Some(&Action::PrevInstance));
    }

    #[test]
    fn surface_keys_zoom_and_reload() {
        let registry = KeybindRegistry::surface_keys();
        assert_eq!(registry.lookup(&primary("=")), Some(&Action::ZoomIn));
        assert_eq!(registry.lookup(&primary("+")), Some(&Action::ZoomIn));
        assert_eq!(registry.lookup(&primary("-")), Some(&Action::ZoomOut));
        assert_eq!(registry.lookup(&primary("0")), Some(&Action::ZoomReset));
        assert_eq!(registry.lookup(&primary("r")), Some(&Action::Reload));
        let f5 = KeyCombo::from_parts(false, false, false, false, "F5");
        assert_eq!(registry.lookup(&f5), Some(&Action::Reload));
    }

    #[test]
    fn app_keys_bind_quit() {
        let registry = KeybindRegistry::app_keys();
        assert_eq!(registry.lookup(&primary("q")), Some(&Action::Quit));
        assert_eq!(registry.lookup(&primary("Q")), Some(&Action::Quit));
        let bare = KeyCombo::from_parts(false, false, false, false, "q");
        assert_eq!(registry.lookup(&bare), None);
    }

    #[test]
    fn shifted_plus_still_zooms() {
        let registry = KeybindRegistry::surface_keys();
        let mut combo = primary("+");
        combo.mods |= MOD_SHIFT;
        assert_eq!(registry.lookup(&combo), Some(&Action::ZoomIn));
    }

    #[test]
    fn shifted_letter_does_not_fall_back() {
        let registry = KeybindRegistry::surface_keys();
        let mut combo = primary("R");
        combo.mods |= MOD_SHIFT;
        assert_eq!(registry.lookup(&combo), None);
    }

    #[test]
    fn invalid_accelerators_are_skipped() {
        let registry = KeybindRegistry::from_bindings([
            ("Hyper+X", Action::Quit),
            ("Ctrl+Q", Action::Quit),
        ]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn focus_shortcuts_only_fire_while_registered() {
        let mut shortcuts = FocusShortcuts::new(KeybindRegistry::instance_shortcuts());
        let combo = primary("2");
        assert_eq!(shortcuts.lookup(&combo), None);

        shortcuts.register();
        assert!(shortcuts.is_registered());
        assert_eq!(shortcuts.lookup(&combo), Some(Action::SelectInstance(2)));

        shortcuts.unregister();
        assert!(!shortcuts.is_registered());
        assert_eq!(shortcuts.lookup(&combo), None);
    }
}
