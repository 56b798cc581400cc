use stoat_common::{Rect, SurfaceId, SurfaceRole};
use wry::WebView;

use crate::zoom::ZoomLevel;

/// A live surface: the wry WebView plus what the shell tracks about it.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    pub(super) surface: SurfaceId,
    pub(super) role: SurfaceRole,
    /// Current URL (best-effort tracking).
    pub(super) current_url: String,
    pub(super) current_title: String,
    pub(super) zoom: ZoomLevel,
}

impl WebViewHandle {
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    pub fn role(&self) -> SurfaceRole {
        self.role
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    pub fn current_title(&self) -> &str {
        &self.current_title
    }

    pub fn set_title(&mut self, title: String) {
        self.current_title = title;
    }

    pub fn set_url(&mut self, url: String) {
        self.current_url = url;
    }

    /// Navigate to a URL.
    pub fn load_url(&mut self, url: &str) -> Result<(), wry::Error> {
        self.current_url = url.to_string();
        self.webview.load_url(url)
    }

    pub fn reload(&self) -> Result<(), wry::Error> {
        self.webview.evaluate_script("window.location.reload();")
    }

    /// Post `payload` to the page's handler for `channel`.
    pub fn send_ipc(&self, channel: &str, payload: &serde_json::Value) -> Result<(), wry::Error> {
        let script = crate::ipc::js_dispatch_message(channel, payload);
        self.webview.evaluate_script(&script)
    }

    /// Place the WebView within the parent window.
    pub fn set_bounds(&self, bounds: Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(to_wry_rect(&bounds))
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }

    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }

    pub fn zoom_level(&self) -> ZoomLevel {
        self.zoom
    }

    pub fn zoom_in(&mut self) -> Result<(), wry::Error> {
        if self.zoom.step(1) {
            self.apply_zoom()?;
        }
        Ok(())
    }

    pub fn zoom_out(&mut self) -> Result<(), wry::Error> {
        if self.zoom.step(-1) {
            self.apply_zoom()?;
        }
        Ok(())
    }

    pub fn zoom_reset(&mut self) -> Result<(), wry::Error> {
        if self.zoom.reset() {
            self.apply_zoom()?;
        }
        Ok(())
    }

    fn apply_zoom(&self) -> Result<(), wry::Error> {
        self.webview.zoom(self.zoom.scale())
    }
}

/// Convert a shell `Rect` (f64 logical coords) to a wry `Rect`.
pub fn to_wry_rect(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}
