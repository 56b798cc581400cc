//! Startup restore, the instance-manager dialog, and shutdown.

use stoat_common::{Event, SurfaceId, TrustedOrigin};
use tracing::{debug, info, warn};

use crate::host::{SurfaceHost, SurfaceSpec};

use super::types::log_host_error;
use super::{DialogRequest, ViewError, ViewManager};

impl<H: SurfaceHost> ViewManager<H> {
    /// Create a surface per persisted instance, in list order, then the
    /// sidebar on top, then restore the selection.
    ///
    /// Any host failure destroys what was created so far.
    pub fn restore(&mut self) -> Result<(), ViewError> {
        if self.shutting_down || !self.surfaces.is_empty() {
            return Ok(());
        }

        let instances = self.store.instances().to_vec();
        let mut created: Vec<(String, SurfaceId)> = Vec::with_capacity(instances.len());

        for instance in &instances {
            let url = self.effective_url(&instance.id, &instance.url).to_string();
            match self.host.create_surface(&SurfaceSpec::instance(url.as_str())) {
                Ok(surface) => {
                    self.bindings.bind(surface, TrustedOrigin::from_url(&url));
                    created.push((instance.id.clone(), surface));
                }
                Err(err) => {
                    self.abandon(created);
                    return Err(err.into());
                }
            }
        }

        let sidebar = match self.host.create_surface(&SurfaceSpec::sidebar()) {
            Ok(surface) => surface,
            Err(err) => {
                self.abandon(created);
                return Err(err.into());
            }
        };
        self.bindings.bind(sidebar, TrustedOrigin::Bundled);
        self.sidebar = Some(sidebar);
        self.surfaces.extend(created);

        let persisted = self.store.config().active_instance_id.clone();
        let target = if self.surfaces.contains_key(&persisted) {
            Some(persisted)
        } else {
            instances.first().map(|i| i.id.clone())
        };
        match target {
            Some(id) => self.select(&id),
            None => self.relayout(),
        }
        info!(instances = self.surfaces.len(), "surfaces restored");
        self.sync();
        Ok(())
    }

    fn abandon(&mut self, created: Vec<(String, SurfaceId)>) {
        warn!(created = created.len(), "restore failed, destroying partial surfaces");
        for (_, surface) in created {
            self.destroy_quietly(surface);
        }
    }

    /// Ask for the instance-manager dialog. At most one exists at a time.
    pub fn request_dialog(&mut self) -> DialogRequest {
        if self.shutting_down {
            return DialogRequest::Unavailable;
        }
        if let Some(dialog) = self.dialog {
            if let Err(e) = self.host.focus(dialog) {
                log_host_error("focus", dialog, &e);
            }
            return DialogRequest::Refocused;
        }
        if self.dialog_pending {
            return DialogRequest::Refocused;
        }
        self.dialog_pending = true;
        DialogRequest::Create
    }

    /// Adopt the surface created after a `DialogRequest::Create`.
    ///
    /// A surface arriving when a dialog already exists, or after shutdown,
    /// is destroyed and `false` is returned.
    pub fn attach_dialog(&mut self, surface: SurfaceId) -> bool {
        self.dialog_pending = false;
        if self.shutting_down || self.dialog.is_some() {
            debug!(%surface, "discarding surplus dialog surface");
            self.destroy_quietly(surface);
            return false;
        }
        self.bindings.bind(surface, TrustedOrigin::Bundled);
        self.dialog = Some(surface);
        self.send_snapshot(surface);
        true
    }

    /// The dialog could not be created; allow another request.
    pub fn dialog_failed(&mut self) {
        self.dialog_pending = false;
    }

    /// Forget and destroy the dialog surface. Returns the surface that was
    /// open so the caller can drop its window.
    pub fn dialog_closed(&mut self) -> Option<SurfaceId> {
        self.dialog_pending = false;
        let dialog = self.dialog.take()?;
        self.destroy_quietly(dialog);
        Some(dialog)
    }

    /// Destroy the dialog, every instance surface and the sidebar.
    ///
    /// Safe to call more than once; every operation after it is a no-op.
    pub fn shutdown(&mut self) {
        if self.shutting_down {
            return;
        }
        info!("view manager shutting down");

        self.dialog_closed();
        for (_, surface) in self.ordered_surfaces() {
            self.destroy_quietly(surface);
        }
        self.surfaces.clear();
        if let Some(sidebar) = self.sidebar.take() {
            self.destroy_quietly(sidebar);
        }

        self.shutting_down = true;
        self.active = None;
        self.bindings.clear();
        self.events.publish(Event::Shutdown);
    }
}
