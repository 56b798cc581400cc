//! Draining queued webview callbacks on the UI tick.

use winit::event_loop::ActiveEventLoop;

use stoat_common::{SurfaceId, SurfaceRole};
use stoat_webview::{PageLoadState, WebViewEvent};

use crate::app_state::core::StoatApp;

impl StoatApp {
    /// Handle every event the webview callbacks queued since the last tick.
    pub(in crate::app_state) fn poll_webview_events(&mut self, event_loop: &ActiveEventLoop) {
        let events = match &self.views {
            Some(views) => views.host().registry().drain_events(),
            None => return,
        };

        for event in events {
            match event {
                WebViewEvent::IpcMessage { surface, body } => {
                    self.handle_ipc_message(event_loop, surface, &body);
                }
                WebViewEvent::PageLoad {
                    surface,
                    state,
                    url,
                } => {
                    tracing::debug!(%surface, ?state, %url, "Page load");
                    self.track_url(surface, url);
                    if state == PageLoadState::Finished {
                        self.on_page_loaded(surface);
                    }
                }
                WebViewEvent::TitleChanged { surface, title } => {
                    tracing::debug!(%surface, %title, "Title changed");
                    if let Some(handle) = self
                        .views
                        .as_mut()
                        .and_then(|v| v.host_mut().registry_mut().get_mut(surface))
                    {
                        handle.set_title(title);
                    }
                }
                WebViewEvent::NavigationBlocked { surface, url } => {
                    tracing::info!(%surface, %url, "Cross-origin navigation blocked");
                }
                WebViewEvent::OpenExternal { surface, url } => {
                    tracing::info!(%surface, %url, "Opening link externally");
                    if let Err(e) = stoat_platform::open_external(&url) {
                        tracing::warn!(%url, error = %e, "Failed to open external link");
                    }
                }
                WebViewEvent::Closed { surface } => {
                    tracing::debug!(%surface, "Surface closed");
                }
            }
        }
    }

    fn track_url(&mut self, surface: SurfaceId, url: String) {
        if let Some(handle) = self
            .views
            .as_mut()
            .and_then(|v| v.host_mut().registry_mut().get_mut(surface))
        {
            handle.set_url(url);
        }
    }

    /// A finished load resets the page state, so resend what it needs.
    fn on_page_loaded(&mut self, surface: SurfaceId) {
        let Some(views) = self.views.as_mut() else {
            return;
        };
        match views.role_of(surface) {
            Some(SurfaceRole::Instance) => views.send_config(surface),
            Some(SurfaceRole::Sidebar) | Some(SurfaceRole::Dialog) => views.send_snapshot(surface),
            None => {}
        }
    }
}
