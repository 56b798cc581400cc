//! Add, edit and remove operations on the instance list.
//!
//! Each operation persists first. A failed write aborts before any surface
//! is touched; a failed surface creation rolls the write back.

use stoat_common::{Event, HostError, TrustedOrigin};
use stoat_config::{normalize_instance_input, Instance};
use tracing::{info, warn};

use crate::host::{SurfaceHost, SurfaceSpec};

use super::types::log_host_error;
use super::{ViewError, ViewManager};

impl<H: SurfaceHost> ViewManager<H> {
    /// Append a new instance, create its surface and switch to it.
    /// Returns the generated id.
    pub fn add(&mut self, label: &str, url: &str) -> Result<String, ViewError> {
        if self.shutting_down {
            return Err(HostError::Unavailable("shutting down".into()).into());
        }
        let (label, url) = normalize_instance_input(label, url)?;
        let id = self.ids.next(self.store.config().instance_ids());

        let mut instances = self.store.instances().to_vec();
        instances.push(Instance::new(id.as_str(), label.as_str(), url.as_str()));
        self.store.set_instances(instances)?;

        let surface = match self.host.create_surface(&SurfaceSpec::instance(url.as_str())) {
            Ok(surface) => surface,
            Err(err) => {
                warn!(instance = %id, error = %err, "surface creation failed, rolling back");
                let rollback = self
                    .store
                    .instances()
                    .iter()
                    .filter(|i| i.id != id)
                    .cloned()
                    .collect();
                if let Err(e) = self.store.set_instances(rollback) {
                    warn!(instance = %id, error = %e, "rollback of instance list failed");
                }
                return Err(err.into());
            }
        };

        self.bindings.bind(surface, TrustedOrigin::from_url(&url));
        self.surfaces.insert(id.clone(), surface);
        self.events.publish(Event::InstanceAdded(id.clone()));
        info!(instance = %id, %surface, %url, "instance added");

        self.raise_sidebar();
        self.select(&id);
        self.sync();
        Ok(id)
    }

    /// Remove an instance and destroy its surface.
    ///
    /// Returns `Ok(false)` for unknown ids. The last instance is kept.
    pub fn remove(&mut self, id: &str) -> Result<bool, ViewError> {
        if self.shutting_down || !self.store.config().has_instance(id) {
            return Ok(false);
        }
        if self.store.instances().len() <= 1 {
            return Err(ViewError::LastInstance);
        }

        let remaining = self
            .store
            .instances()
            .iter()
            .filter(|i| i.id != id)
            .cloned()
            .collect();
        self.store.set_instances(remaining)?;

        if let Some(surface) = self.surfaces.remove(id) {
            self.destroy_quietly(surface);
        }
        if self.url_override.as_ref().is_some_and(|(oid, _)| oid == id) {
            self.url_override = None;
        }
        self.events.publish(Event::InstanceRemoved(id.to_string()));
        info!(instance = id, "instance removed");

        if self.active.as_deref() == Some(id) {
            self.active = None;
            if let Some(first) = self.store.instances().first().map(|i| i.id.clone()) {
                self.select(&first);
            }
        }
        self.sync();
        Ok(true)
    }

    /// Change an instance's label and url.
    ///
    /// The surface reloads only when the origin changes.
    pub fn edit(&mut self, id: &str, label: &str, url: &str) -> Result<bool, ViewError> {
        if self.shutting_down || !self.store.config().has_instance(id) {
            return Ok(false);
        }
        let (label, url) = normalize_instance_input(label, url)?;

        let instances = self
            .store
            .instances()
            .iter()
            .map(|i| {
                if i.id == id {
                    Instance::new(id, label.as_str(), url.as_str())
                } else {
                    i.clone()
                }
            })
            .collect();
        self.store.set_instances(instances)?;

        if self.url_override.as_ref().is_some_and(|(oid, _)| oid == id) {
            self.url_override = None;
        }

        if let Some(surface) = self.surfaces.get(id).copied() {
            let origin = TrustedOrigin::from_url(&url);
            if self.bindings.get(surface).as_ref() != Some(&origin) {
                info!(instance = id, %url, "origin changed, reloading");
                self.bindings.bind(surface, origin);
                if let Err(e) = self.host.load_url(surface, &url) {
                    log_host_error("load_url", surface, &e);
                }
            }
        }

        self.sync();
        Ok(true)
    }
}
