use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinate used for parked (off-canvas) surfaces.
pub const PARK_OFFSET: f64 = -99999.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// The off-canvas rectangle inactive surfaces are moved to.
    ///
    /// Non-zero sized: zero-sized child views confuse hit-testing on GTK.
    pub const PARKED: Rect = Rect {
        x: PARK_OFFSET,
        y: PARK_OFFSET,
        width: 1.0,
        height: 1.0,
    };

    pub fn is_parked(&self) -> bool {
        *self == Rect::PARKED
    }

    /// Whether any part of this rect overlaps the `[0,w]×[0,h]` canvas.
    pub fn intersects_canvas(&self, width: f64, height: f64) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && self.x < width
            && self.y < height
            && self.x + self.width > 0.0
            && self.y + self.height > 0.0
    }
}

/// Host window content-area dimensions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Host-assigned identity of a live surface. Never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SurfaceId(pub u32);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface-{}", self.0)
    }
}

/// What a surface is for; decides its IPC allowlist and origin policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceRole {
    /// Remote endpoint content, one per instance.
    Instance,
    /// Titlebar / tab strip at the top of the main window.
    Sidebar,
    /// Instance manager dialog in its own window.
    Dialog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppState {
    Starting,
    Running,
    ShuttingDown,
}
