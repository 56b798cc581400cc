//! Pushing layout results to the host.

use stoat_common::{Rect, SurfaceId};

use crate::host::SurfaceHost;
use crate::layout::{ChromeMode, LayoutPlan};

use super::types::log_host_error;
use super::ViewManager;

impl<H: SurfaceHost> ViewManager<H> {
    /// The plan for the current content size and selection.
    pub fn compute_layout(&self) -> LayoutPlan {
        let ordered = self.ordered_surfaces();
        self.layout.compute(
            self.host.content_size(),
            self.chrome,
            self.active.as_deref(),
            ordered.iter().map(|(id, _)| id.as_str()),
        )
    }

    /// Recompute the layout and apply it to every surface.
    pub fn relayout(&mut self) {
        if self.shutting_down {
            return;
        }
        let plan = self.compute_layout();

        if let Some(sidebar) = self.sidebar {
            self.apply_bounds(sidebar, plan.sidebar);
        }
        for (id, rect) in plan.surfaces {
            if let Some(surface) = self.surfaces.get(&id).copied() {
                self.apply_bounds(surface, rect);
            }
        }
    }

    /// Switch between custom and native chrome.
    pub fn set_chrome(&mut self, chrome: ChromeMode) {
        if self.chrome != chrome {
            self.chrome = chrome;
            self.relayout();
        }
    }

    pub(super) fn raise_sidebar(&mut self) {
        if let Some(sidebar) = self.sidebar {
            if let Err(e) = self.host.raise(sidebar) {
                log_host_error("raise", sidebar, &e);
            }
        }
    }

    fn apply_bounds(&mut self, surface: SurfaceId, rect: Rect) {
        if let Err(e) = self.host.set_bounds(surface, rect) {
            log_host_error("set_bounds", surface, &e);
        }
    }
}
