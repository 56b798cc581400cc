//! Layout engine types and configuration.

use stoat_common::Rect;

/// Height of the custom titlebar / tab strip in logical pixels.
pub const TITLEBAR_HEIGHT: f64 = 36.0;

/// Whether the app draws its own titlebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChromeMode {
    /// The sidebar surface is the titlebar.
    #[default]
    Custom,
    /// The OS draws decorations; the sidebar is parked.
    Native,
}

impl ChromeMode {
    pub fn from_custom_frame(custom_frame: bool) -> Self {
        if custom_frame {
            ChromeMode::Custom
        } else {
            ChromeMode::Native
        }
    }
}

/// Computes surface rectangles for the main window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEngine {
    pub titlebar_height: f64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            titlebar_height: TITLEBAR_HEIGHT,
        }
    }
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    pub sidebar: Rect,
    /// One entry per instance, in the order given to `compute`.
    pub surfaces: Vec<(String, Rect)>,
}

impl LayoutPlan {
    pub fn bounds_of(&self, id: &str) -> Option<Rect> {
        self.surfaces
            .iter()
            .find(|(sid, _)| sid == id)
            .map(|(_, r)| *r)
    }

    /// Ids whose rect is not parked.
    pub fn visible(&self) -> impl Iterator<Item = &str> {
        self.surfaces
            .iter()
            .filter(|(_, r)| !r.is_parked())
            .map(|(id, _)| id.as_str())
    }
}
