//! WebView lifecycle management.
//!
//! `WebViewManager` builds `wry::WebView` children with the guard and bridge
//! handlers installed; `SurfaceRegistry` owns the live handles by
//! `SurfaceId`.

use std::sync::{Arc, Mutex};

use stoat_common::OriginBindings;

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::WebViewHandle;
pub use registry::SurfaceRegistry;
pub use types::SurfaceConfig;

/// Builds surfaces and collects their events.
pub struct WebViewManager {
    /// Event sink; callbacks push here, the main loop drains.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Origin table read by every navigation guard.
    bindings: OriginBindings,
    /// Serves `stoat://` for the sidebar and dialog.
    content_provider: Option<Arc<ContentProvider>>,
}

impl WebViewManager {
    pub fn new(bindings: OriginBindings) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            bindings,
            content_provider: None,
        }
    }

    pub fn bindings(&self) -> &OriginBindings {
        &self.bindings
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }

    pub(crate) fn push_event(&self, event: WebViewEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stoat_common::SurfaceId;

    #[test]
    fn drain_empties_the_queue() {
        let mgr = WebViewManager::new(OriginBindings::new());
        mgr.push_event(WebViewEvent::Closed {
            surface: SurfaceId(1),
        });
        mgr.push_event(WebViewEvent::Closed {
            surface: SurfaceId(2),
        });

        let drained = mgr.drain_events();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].surface(), SurfaceId(1));
        assert!(mgr.drain_events().is_empty());
    }

    #[test]
    fn manager_shares_the_binding_table() {
        let bindings = OriginBindings::new();
        let mgr = WebViewManager::new(bindings.clone());
        bindings.bind(SurfaceId(3), stoat_common::TrustedOrigin::Bundled);
        assert_eq!(mgr.bindings().len(), 1);
    }
}
