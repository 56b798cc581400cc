//! Action dispatch and main-window controls.

use winit::event_loop::ActiveEventLoop;

use stoat_common::Action;

use super::core::StoatApp;
use super::tray::{TrayIntent, TrayMenu};
use super::webview_bridge::is_surface_action;

/// What a close request on the main window turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CloseAction {
    HideToTray,
    Quit,
}

/// Closing hides only when configured to and a tray icon can bring the
/// window back. An explicit quit always wins.
pub(super) fn close_action(
    minimise_to_tray: bool,
    tray_available: bool,
    quitting: bool,
) -> CloseAction {
    if minimise_to_tray && tray_available && !quitting {
        CloseAction::HideToTray
    } else {
        CloseAction::Quit
    }
}

/// How the main window leaves the screen without quitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Concealment {
    Hidden,
    /// No tray to restore from; stay reachable from the taskbar.
    Minimised,
}

impl Concealment {
    pub(super) fn for_tray(tray_available: bool) -> Self {
        if tray_available {
            Concealment::Hidden
        } else {
            Concealment::Minimised
        }
    }
}

impl StoatApp {
    /// Execute an action resolved from a shortcut or a surface.
    pub(super) fn dispatch(&mut self, action: Action, event_loop: &ActiveEventLoop) {
        tracing::debug!(?action, "Dispatching action");

        if is_surface_action(&action) {
            self.apply_to_active_surface(&action);
            return;
        }

        match action {
            Action::SelectInstance(n) => {
                if let Some(views) = self.views.as_mut() {
                    views.switch_to_index(n as usize);
                }
            }
            Action::NextInstance => {
                if let Some(views) = self.views.as_mut() {
                    views.switch_next();
                }
            }
            Action::PrevInstance => {
                if let Some(views) = self.views.as_mut() {
                    views.switch_prev();
                }
            }
            Action::OpenInstanceManager => self.open_instance_manager(event_loop),
            Action::Minimise => self.minimise_window(),
            Action::ToggleMaximise => self.toggle_maximise(),
            Action::CloseWindow => self.request_close(event_loop),
            Action::ShowWindow => self.show_window(),
            Action::ToggleVisibility => {
                if self.is_window_visible() {
                    self.hide_to_tray();
                } else {
                    self.show_window();
                }
            }
            Action::Quit => self.quit(event_loop),
            Action::ZoomIn
            | Action::ZoomOut
            | Action::ZoomReset
            | Action::Reload
            | Action::None => {}
        }
    }

    /// Act on an entry picked from the tray menu.
    pub(super) fn handle_tray_intent(&mut self, intent: TrayIntent, event_loop: &ActiveEventLoop) {
        tracing::debug!(?intent, "Tray intent");
        match intent {
            TrayIntent::SwitchInstance(id) => {
                if let Some(views) = self.views.as_mut() {
                    views.switch_to(&id);
                }
                self.show_window();
            }
            TrayIntent::Run(action) => self.dispatch(action, event_loop),
        }
    }

    /// Rebuild the tray menu from the current instances and visibility.
    pub(super) fn refresh_tray(&mut self) {
        let Some(views) = &self.views else {
            return;
        };
        self.tray = TrayMenu::build(&views.snapshot(), self.is_window_visible());
        if let Some(system_tray) = self.system_tray.as_mut() {
            system_tray.update(&self.tray);
        }
        tracing::debug!(entries = ?self.tray.entry_labels(), "Tray menu rebuilt");
    }

    pub(super) fn minimise_window(&self) {
        if let Some(window) = &self.window {
            window.set_minimized(true);
        }
    }

    pub(super) fn toggle_maximise(&mut self) {
        if let Some(window) = &self.window {
            window.set_maximized(!window.is_maximized());
        }
        self.mark_window_state_dirty();
    }

    pub(super) fn show_window(&mut self) {
        if let Some(window) = &self.window {
            window.set_visible(true);
            window.set_minimized(false);
            window.focus_window();
        }
        self.refresh_tray();
    }

    /// Get the window out of the way without quitting.
    pub(super) fn hide_to_tray(&mut self) {
        if let Some(window) = &self.window {
            match Concealment::for_tray(self.tray_available()) {
                Concealment::Hidden => window.set_visible(false),
                Concealment::Minimised => window.set_minimized(true),
            }
        }
        self.shortcuts.unregister();
        self.refresh_tray();
    }

    /// Close the main window: to the tray if configured, else quit.
    pub(super) fn request_close(&mut self, event_loop: &ActiveEventLoop) {
        if self.handle_close() {
            event_loop.exit();
        }
    }

    /// Returns true once the app has shut down and the loop should exit.
    pub(super) fn handle_close(&mut self) -> bool {
        let to_tray = self.config().is_some_and(|c| c.minimise_to_tray);
        match close_action(to_tray, self.tray_available(), self.should_exit) {
            CloseAction::HideToTray => {
                tracing::info!("Close requested, hiding to tray");
                self.hide_to_tray();
                false
            }
            CloseAction::Quit => {
                self.begin_quit();
                true
            }
        }
    }

    pub(super) fn quit(&mut self, event_loop: &ActiveEventLoop) {
        self.begin_quit();
        event_loop.exit();
    }

    fn begin_quit(&mut self) {
        tracing::info!("Quit requested");
        self.shutdown();
    }
}
