use std::collections::HashMap;

use stoat_common::{Rect, SurfaceId};
use tracing::debug;
use wry::raw_window_handle;

use crate::events::WebViewEvent;

use super::handle::WebViewHandle;
use super::types::SurfaceConfig;
use super::WebViewManager;

/// Owns every live WebView by `SurfaceId`. Ids are allocated here and
/// never reused, even when creation fails.
pub struct SurfaceRegistry {
    manager: WebViewManager,
    handles: HashMap<SurfaceId, WebViewHandle>,
    next_id: u32,
}

impl SurfaceRegistry {
    pub fn new(manager: WebViewManager) -> Self {
        Self {
            manager,
            handles: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn manager(&self) -> &WebViewManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut WebViewManager {
        &mut self.manager
    }

    fn allocate_id(&mut self) -> SurfaceId {
        let id = SurfaceId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Create a surface as a child of `window` and register it.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        window: &W,
        bounds: Rect,
        config: SurfaceConfig,
    ) -> Result<SurfaceId, wry::Error> {
        let id = self.allocate_id();
        let handle = self.manager.create(id, window, bounds, config)?;
        self.handles.insert(id, handle);
        Ok(id)
    }

    pub fn get(&self, id: SurfaceId) -> Option<&WebViewHandle> {
        self.handles.get(&id)
    }

    pub fn get_mut(&mut self, id: SurfaceId) -> Option<&mut WebViewHandle> {
        self.handles.get_mut(&id)
    }

    pub fn contains(&self, id: SurfaceId) -> bool {
        self.handles.contains_key(&id)
    }

    /// Drop a surface's WebView and its origin binding.
    pub fn destroy(&mut self, id: SurfaceId) -> bool {
        if self.handles.remove(&id).is_some() {
            self.manager.bindings().unbind(id);
            debug!(surface = %id, "WebView destroyed");
            self.manager.push_event(WebViewEvent::Closed { surface: id });
            true
        } else {
            false
        }
    }

    pub fn surfaces(&self) -> Vec<SurfaceId> {
        self.handles.keys().copied().collect()
    }

    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.manager.drain_events()
    }

    /// Destroy all surfaces. Used during shutdown.
    pub fn destroy_all(&mut self) {
        for id in self.surfaces() {
            self.destroy(id);
        }
    }

    pub fn count(&self) -> usize {
        self.handles.len()
    }
}
