//! StoatApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::broadcast;
use winit::window::Window;

use stoat_common::{AppState, Event};
use stoat_config::ConfigStore;
use stoat_platform::{BadgeCounts, BadgeStyle, FocusShortcuts, KeybindRegistry};
use stoat_views::ViewManager;

use super::system_tray::SystemTray;
use super::tray::TrayMenu;
use super::types::LaunchOptions;
use super::webview_bridge::WryHost;

/// Top-level application state.
pub struct StoatApp {
    pub(super) options: LaunchOptions,
    pub(super) state: AppState,

    /// Held until the window exists, then moved into the view manager.
    pub(super) store: Option<ConfigStore>,
    pub(super) views: Option<ViewManager<WryHost>>,
    pub(super) view_events: Option<broadcast::Receiver<Event>>,
    pub(super) config_events: Option<broadcast::Receiver<Event>>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) dialog_window: Option<Arc<Window>>,

    // Input
    pub(super) shortcuts: FocusShortcuts,
    pub(super) app_keys: KeybindRegistry,
    pub(super) surface_keys: KeybindRegistry,
    pub(super) modifiers: winit::keyboard::ModifiersState,

    // Presentation
    pub(super) badges: BadgeCounts,
    pub(super) badge_style: BadgeStyle,
    pub(super) tray: TrayMenu,
    /// `None` where the platform has no tray, or it failed to appear.
    pub(super) system_tray: Option<SystemTray>,

    /// A resize arrived; the layout is recomputed on the next tick.
    pub(super) relayout_pending: bool,
    /// Time of the last move/resize not yet persisted.
    pub(super) window_state_dirty: Option<Instant>,

    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl StoatApp {
    pub fn new(store: ConfigStore, options: LaunchOptions) -> Self {
        Self {
            options,
            state: AppState::Starting,
            store: Some(store),
            views: None,
            view_events: None,
            config_events: None,
            window: None,
            dialog_window: None,
            shortcuts: FocusShortcuts::new(KeybindRegistry::instance_shortcuts()),
            app_keys: KeybindRegistry::app_keys(),
            surface_keys: KeybindRegistry::surface_keys(),
            modifiers: winit::keyboard::ModifiersState::empty(),
            badges: BadgeCounts::new(),
            badge_style: BadgeStyle::current(),
            tray: TrayMenu::default(),
            system_tray: None,
            relayout_pending: false,
            window_state_dirty: None,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }

    /// The persisted config, wherever it currently lives.
    pub(super) fn config(&self) -> Option<&stoat_config::DesktopConfig> {
        match (&self.views, &self.store) {
            (Some(views), _) => Some(views.config()),
            (None, Some(store)) => Some(store.config()),
            (None, None) => None,
        }
    }

    /// Whether a hidden window can be brought back from a tray icon.
    pub(super) fn tray_available(&self) -> bool {
        self.system_tray.is_some()
    }

    pub(super) fn is_window_visible(&self) -> bool {
        self.window
            .as_ref()
            .map(|w| w.is_visible().unwrap_or(true) && !w.is_minimized().unwrap_or(false))
            .unwrap_or(false)
    }
}
