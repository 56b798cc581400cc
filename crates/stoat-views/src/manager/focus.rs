//! Active selection: switching and cycling between instances.

use stoat_common::Event;
use tracing::{info, warn};

use crate::host::SurfaceHost;

use super::types::log_host_error;
use super::ViewManager;

impl<H: SurfaceHost> ViewManager<H> {
    /// Make `id` the visible instance. Unknown ids are ignored.
    pub fn switch_to(&mut self, id: &str) -> bool {
        if self.shutting_down || !self.surfaces.contains_key(id) {
            return false;
        }
        self.select(id);
        self.sync();
        true
    }

    /// Switch to the `n`th instance, counting from 1.
    pub fn switch_to_index(&mut self, n: usize) -> bool {
        let Some(id) = n
            .checked_sub(1)
            .and_then(|i| self.store.instances().get(i))
            .map(|i| i.id.clone())
        else {
            return false;
        };
        self.switch_to(&id)
    }

    pub fn switch_next(&mut self) -> bool {
        self.cycle(1)
    }

    pub fn switch_prev(&mut self) -> bool {
        self.cycle(-1)
    }

    /// Give keyboard focus to the active surface.
    pub fn focus_active(&mut self) {
        if let Some(surface) = self.active_surface() {
            if let Err(e) = self.host.focus(surface) {
                log_host_error("focus", surface, &e);
            }
        }
    }

    fn cycle(&mut self, step: isize) -> bool {
        let instances = self.store.instances();
        let len = instances.len();
        if len <= 1 {
            return false;
        }
        let current = self
            .active
            .as_deref()
            .and_then(|id| instances.iter().position(|i| i.id == id))
            .unwrap_or(0);
        let next = (current as isize + step).rem_euclid(len as isize) as usize;
        let id = instances[next].id.clone();
        self.switch_to(&id)
    }

    /// Select without broadcasting. Persisting the selection is best-effort.
    pub(super) fn select(&mut self, id: &str) {
        self.active = Some(id.to_string());
        if let Err(e) = self.store.set_active_instance_id(id) {
            warn!(instance = id, error = %e, "failed to persist active instance");
        }
        self.relayout();
        self.focus_active();
        self.events.publish(Event::InstanceSwitched(id.to_string()));
        info!(instance = id, "switched instance");
    }
}
