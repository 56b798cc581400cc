//! Chromium-style zoom levels: each step scales by 1.2.

const ZOOM_FACTOR: f64 = 1.2;
/// Roughly 25% .. 500%, the range Chromium accepts.
const MIN_LEVEL: i32 = -7;
const MAX_LEVEL: i32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoomLevel(i32);

impl ZoomLevel {
    pub fn level(self) -> i32 {
        self.0
    }

    pub fn scale(self) -> f64 {
        ZOOM_FACTOR.powi(self.0)
    }

    /// Move by `delta` steps, clamped. Returns whether the level changed.
    pub fn step(&mut self, delta: i32) -> bool {
        let next = (self.0 + delta).clamp(MIN_LEVEL, MAX_LEVEL);
        let changed = next != self.0;
        self.0 = next;
        changed
    }

    pub fn reset(&mut self) -> bool {
        let changed = self.0 != 0;
        self.0 = 0;
        changed
    }
}
