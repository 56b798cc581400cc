//! Window creation and view manager setup.

use std::sync::Arc;

use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use stoat_common::{AppState, OriginBindings};
use stoat_config::DesktopConfig;
use stoat_views::ViewManager;
use stoat_webview::{ContentProvider, SurfaceRegistry, WebViewManager};

use super::core::StoatApp;
use super::system_tray::SystemTray;
use super::types::{DEFAULT_WINDOW_SIZE, MIN_WINDOW_SIZE, WINDOW_TITLE};
use super::webview_bridge::WryHost;

/// Optional on-disk assets served next to the compiled-in pages.
const ASSETS_DIR: &str = "assets";

/// Main window attributes restored from the saved geometry. The window
/// starts invisible and is shown once the surfaces exist.
pub(super) fn main_window_attributes(config: &DesktopConfig) -> WindowAttributes {
    let state = config.window_state;
    let (width, height) = state
        .restorable_size()
        .map(|(w, h)| (w as f64, h as f64))
        .unwrap_or(DEFAULT_WINDOW_SIZE);

    let mut attrs = WindowAttributes::default()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(width, height))
        .with_min_inner_size(LogicalSize::new(MIN_WINDOW_SIZE.0, MIN_WINDOW_SIZE.1))
        .with_decorations(!config.custom_frame)
        .with_maximized(state.is_maximised)
        .with_visible(false);

    if let Some((x, y)) = state.restorable_position() {
        attrs = attrs.with_position(LogicalPosition::new(x, y));
    }
    attrs
}

impl StoatApp {
    /// Create the main window and restore every surface.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let Some(store) = self.store.take() else {
            tracing::error!("Config store missing at window creation");
            return false;
        };

        let window = match event_loop.create_window(main_window_attributes(store.config())) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let first_launch = store.config().first_launch;
        let start_hidden = self.options.hidden || store.config().start_minimised_to_tray;
        self.config_events = Some(store.subscribe());

        let bindings = OriginBindings::new();
        let host = WryHost::new(window.clone(), self.initialize_webviews(bindings.clone()));
        let mut views = ViewManager::new(host, store, bindings)
            .with_url_override(self.options.force_server.clone());
        self.view_events = Some(views.subscribe());

        if let Err(e) = views.restore() {
            tracing::error!(error = %e, "Failed to restore instance surfaces");
            return false;
        }
        if first_launch {
            views.set_first_launch(false);
        }

        tracing::info!(
            surfaces = views.surface_count(),
            active = views.active_id().unwrap_or("none"),
            "Instance surfaces restored"
        );

        self.views = Some(views);
        self.window = Some(window.clone());
        self.state = AppState::Running;

        self.refresh_tray();
        self.system_tray = SystemTray::create(&self.tray);

        if start_hidden {
            tracing::info!("Starting hidden to tray");
            if !self.tray_available() {
                window.set_visible(true);
            }
            self.hide_to_tray();
        } else {
            window.set_visible(true);
            window.focus_window();
            self.refresh_tray();
        }
        true
    }

    /// Set up the WebView registry with the content provider for `stoat://`.
    fn initialize_webviews(&self, bindings: OriginBindings) -> SurfaceRegistry {
        let assets_path = std::env::current_dir().unwrap_or_default().join(ASSETS_DIR);
        let mut manager = WebViewManager::new(bindings);
        manager.set_content_provider(ContentProvider::bundled(&assets_path));

        tracing::info!(
            assets_dir = %assets_path.display(),
            "WebView registry initialized"
        );
        SurfaceRegistry::new(manager)
    }
}
