//! Graceful shutdown: release shortcuts, persist geometry, destroy surfaces.

use stoat_common::AppState;

use super::core::StoatApp;

impl StoatApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Unregister shortcuts
    /// 2. Persist window state (the view manager refuses writes afterwards)
    /// 3. Destroy the dialog, instance surfaces and sidebar
    /// 4. Drop the dialog window, the tray, then the store and the main window
    pub(super) fn shutdown(&mut self) {
        if self.state == AppState::ShuttingDown {
            return;
        }
        tracing::info!("Initiating graceful shutdown");
        self.state = AppState::ShuttingDown;
        self.should_exit = true;

        // 1. Shortcuts only live while the window is focused
        self.shortcuts.unregister();

        // 2. Final geometry
        self.save_window_state();

        // 3. Surfaces
        if let Some(views) = self.views.as_mut() {
            views.shutdown();
            views.host_mut().set_dialog_window(None);
        }
        self.dialog_window = None;

        // 4. Tray, store and windows
        self.system_tray = None;
        self.view_events = None;
        self.config_events = None;
        self.views = None;
        self.store = None;
        self.window = None;

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================
