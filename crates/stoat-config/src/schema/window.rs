//! Persisted main-window geometry.

use serde::{Deserialize, Serialize};

/// Last known outer position and inner size of the main window.
///
/// All zeros means "never saved"; restore only applies the parts that
/// carry information (see [`WindowState::restorable_position`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowState {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub is_maximised: bool,
}

impl WindowState {
    /// Position to restore, if one was saved.
    ///
    /// A window parked exactly at the origin is indistinguishable from an
    /// unsaved state and is left to the window system.
    pub fn restorable_position(&self) -> Option<(i32, i32)> {
        (self.x > 0 || self.y > 0).then_some((self.x, self.y))
    }

    /// Size to restore, if both dimensions were saved.
    pub fn restorable_size(&self) -> Option<(u32, u32)> {
        (self.width > 0 && self.height > 0).then_some((self.width, self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_restores_nothing() {
        let state = WindowState::default();
        assert_eq!(state.restorable_position(), None);
        assert_eq!(state.restorable_size(), None);
        assert!(!state.is_maximised);
    }

    #[test]
    fn position_restores_when_either_axis_is_set() {
        let state = WindowState {
            x: 0,
            y: 40,
            ..Default::default()
        };
        assert_eq!(state.restorable_position(), Some((0, 40)));
    }

    #[test]
    fn negative_position_is_not_restored() {
        let state = WindowState {
            x: -200,
            y: -10,
            ..Default::default()
        };
        assert_eq!(state.restorable_position(), None);
    }

    #[test]
    fn size_needs_both_dimensions() {
        let half = WindowState {
            width: 800,
            ..Default::default()
        };
        assert_eq!(half.restorable_size(), None);

        let full = WindowState {
            width: 800,
            height: 600,
            ..Default::default()
        };
        assert_eq!(full.restorable_size(), Some((800, 600)));
    }

    #[test]
    fn partial_toml() {
        let state: WindowState = toml::from_str("width = 1024\nis_maximised = true\n").unwrap();
        assert_eq!(state.width, 1024);
        assert_eq!(state.height, 0);
        assert!(state.is_maximised);
    }
}
