//! WebView event types.

use serde::{Deserialize, Serialize};
use stoat_common::SurfaceId;

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by surfaces. Pushed from wry callbacks, drained by the
/// main loop.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    PageLoad {
        surface: SurfaceId,
        state: PageLoadState,
        url: String,
    },
    TitleChanged {
        surface: SurfaceId,
        title: String,
    },
    /// A JSON message posted through the IPC bridge.
    IpcMessage {
        surface: SurfaceId,
        body: String,
    },
    /// A top-level navigation left the surface's origin and was cancelled.
    NavigationBlocked {
        surface: SurfaceId,
        url: String,
    },
    /// A new-window request for an external link; the main loop opens it
    /// in the system handler.
    OpenExternal {
        surface: SurfaceId,
        url: String,
    },
    Closed {
        surface: SurfaceId,
    },
}

impl WebViewEvent {
    pub fn surface(&self) -> SurfaceId {
        match self {
            WebViewEvent::PageLoad { surface, .. }
            | WebViewEvent::TitleChanged { surface, .. }
            | WebViewEvent::IpcMessage { surface, .. }
            | WebViewEvent::NavigationBlocked { surface, .. }
            | WebViewEvent::OpenExternal { surface, .. }
            | WebViewEvent::Closed { surface } => *surface,
        }
    }
}
