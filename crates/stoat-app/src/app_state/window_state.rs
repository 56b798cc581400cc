//! Main window geometry capture and debounced persistence.

use std::time::Instant;

use winit::window::Window;

use stoat_config::WindowState;

use super::core::StoatApp;
use super::types::WINDOW_STATE_DEBOUNCE;

/// Geometry to persist for `window`.
///
/// A maximised window keeps the last normal bounds from `previous` so
/// un-maximising after a restart lands where the user left it. Minimised
/// windows report nothing useful and yield `None`.
pub(super) fn capture(window: &Window, previous: WindowState) -> Option<WindowState> {
    if window.is_minimized().unwrap_or(false) {
        return None;
    }
    if window.is_maximized() {
        return Some(WindowState {
            is_maximised: true,
            ..previous
        });
    }

    let scale = window.scale_factor();
    let size = window.inner_size().to_logical::<u32>(scale);
    let (x, y) = window
        .outer_position()
        .map(|p| {
            let p = p.to_logical::<i32>(scale);
            (p.x, p.y)
        })
        .unwrap_or((previous.x, previous.y));

    Some(WindowState {
        x,
        y,
        width: size.width,
        height: size.height,
        is_maximised: false,
    })
}

/// Whether a change at `dirty_since` has been quiet long enough to save.
pub(super) fn debounce_elapsed(dirty_since: Instant, now: Instant) -> bool {
    now.saturating_duration_since(dirty_since) >= WINDOW_STATE_DEBOUNCE
}

impl StoatApp {
    /// Note a move/resize; it is persisted once things settle.
    pub(super) fn mark_window_state_dirty(&mut self) {
        self.window_state_dirty = Some(Instant::now());
    }

    /// Persist pending geometry if the debounce period has passed.
    pub(super) fn flush_window_state_if_settled(&mut self, now: Instant) {
        if let Some(since) = self.window_state_dirty {
            if debounce_elapsed(since, now) {
                self.save_window_state();
            }
        }
    }

    /// Persist the current geometry now. Failures are logged by the view
    /// manager and never propagated.
    pub(super) fn save_window_state(&mut self) {
        self.window_state_dirty = None;
        let (Some(window), Some(views)) = (&self.window, self.views.as_mut()) else {
            return;
        };
        let previous = views.config().window_state;
        if let Some(state) = capture(window, previous) {
            if state != previous && views.save_window_state(state) {
                tracing::debug!(?state, "Window state saved");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn debounce_waits_for_quiet_period() {
        let start = Instant::now();
        assert!(!debounce_elapsed(start, start));
        assert!(!debounce_elapsed(start, start + Duration::from_millis(100)));
        assert!(debounce_elapsed(start, start + WINDOW_STATE_DEBOUNCE));
    }

    #[test]
    fn debounce_tolerates_clock_order() {
        let now = Instant::now();
        assert!(!debounce_elapsed(now + Duration::from_secs(1), now));
    }
}
