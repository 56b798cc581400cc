//! Core types, constructors and accessors for ViewManager.

use std::collections::HashMap;

use stoat_common::{
    ConfigError, Event, EventBus, HostError, InstanceIdGenerator, OriginBindings, SurfaceId,
    SurfaceRole,
};
use stoat_config::{ConfigStore, DesktopConfig};
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::host::SurfaceHost;
use crate::layout::{ChromeMode, LayoutEngine};

const EVENT_CAPACITY: usize = 64;

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("invalid instance: {0}")]
    Validation(String),

    #[error("the last instance cannot be removed")]
    LastInstance,

    #[error(transparent)]
    Persist(ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),
}

impl From<ConfigError> for ViewError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ValidationError(msg) => ViewError::Validation(msg),
            other => ViewError::Persist(other),
        }
    }
}

/// Outcome of asking for the instance-manager dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogRequest {
    /// A dialog exists (or is being created); it was brought forward.
    Refocused,
    /// The caller must create the dialog and hand it to `attach_dialog`.
    Create,
    /// The manager is shutting down.
    Unavailable,
}

/// Owns every surface of the main window and the dialog, and keeps them
/// consistent with the persisted instance list.
///
/// After each completed operation the set of instance surfaces matches the
/// instance ids in the store, at most one surface is active, and every
/// surface has seen exactly one broadcast of the new state.
pub struct ViewManager<H: SurfaceHost> {
    pub(super) host: H,
    pub(super) store: ConfigStore,
    pub(super) bindings: OriginBindings,
    pub(super) layout: LayoutEngine,
    pub(super) ids: InstanceIdGenerator,
    /// Instance id to its live surface.
    pub(super) surfaces: HashMap<String, SurfaceId>,
    pub(super) active: Option<String>,
    pub(super) sidebar: Option<SurfaceId>,
    pub(super) dialog: Option<SurfaceId>,
    /// A `Create` was handed out and not yet attached.
    pub(super) dialog_pending: bool,
    pub(super) chrome: ChromeMode,
    pub(super) shutting_down: bool,
    /// `(instance id, url)` used instead of the persisted url for this run.
    pub(super) url_override: Option<(String, String)>,
    pub(super) events: EventBus,
}

impl<H: SurfaceHost> ViewManager<H> {
    /// Wrap a host and a store. No surface is created until `restore`.
    pub fn new(host: H, store: ConfigStore, bindings: OriginBindings) -> Self {
        let chrome = ChromeMode::from_custom_frame(store.config().custom_frame);
        Self {
            host,
            store,
            bindings,
            layout: LayoutEngine::default(),
            ids: InstanceIdGenerator::new(),
            surfaces: HashMap::new(),
            active: None,
            sidebar: None,
            dialog: None,
            dialog_pending: false,
            chrome,
            shutting_down: false,
            url_override: None,
            events: EventBus::new(EVENT_CAPACITY),
        }
    }

    pub fn with_layout(mut self, layout: LayoutEngine) -> Self {
        self.layout = layout;
        self
    }

    /// Load the first instance from `url` for this run without persisting it.
    pub fn with_url_override(mut self, url: Option<String>) -> Self {
        self.url_override = url.and_then(|url| {
            self.store
                .instances()
                .first()
                .map(|first| (first.id.clone(), url))
        });
        self
    }

    // -- Accessors --

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn config(&self) -> &DesktopConfig {
        self.store.config()
    }

    pub fn bindings(&self) -> &OriginBindings {
        &self.bindings
    }

    pub fn chrome(&self) -> ChromeMode {
        self.chrome
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_surface(&self) -> Option<SurfaceId> {
        self.active
            .as_deref()
            .and_then(|id| self.surfaces.get(id).copied())
    }

    pub fn surface_of(&self, id: &str) -> Option<SurfaceId> {
        self.surfaces.get(id).copied()
    }

    pub fn sidebar(&self) -> Option<SurfaceId> {
        self.sidebar
    }

    pub fn dialog(&self) -> Option<SurfaceId> {
        self.dialog
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutting_down
    }

    /// Instance id rendered by `surface`, if it is an instance surface.
    pub fn instance_for_surface(&self, surface: SurfaceId) -> Option<&str> {
        self.surfaces
            .iter()
            .find(|(_, s)| **s == surface)
            .map(|(id, _)| id.as_str())
    }

    pub fn role_of(&self, surface: SurfaceId) -> Option<SurfaceRole> {
        if self.sidebar == Some(surface) {
            Some(SurfaceRole::Sidebar)
        } else if self.dialog == Some(surface) {
            Some(SurfaceRole::Dialog)
        } else if self.instance_for_surface(surface).is_some() {
            Some(SurfaceRole::Instance)
        } else {
            None
        }
    }

    /// Receive `InstanceAdded`, `InstanceRemoved`, `InstanceSwitched` and
    /// `Shutdown`.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    // -- Internal helpers --

    /// Url a surface for `id` should load: the override if set, else `url`.
    pub(super) fn effective_url<'a>(&'a self, id: &str, url: &'a str) -> &'a str {
        match &self.url_override {
            Some((override_id, override_url)) if override_id == id => override_url,
            _ => url,
        }
    }

    /// Surfaces of the persisted instances, in tab order.
    pub(super) fn ordered_surfaces(&self) -> Vec<(String, SurfaceId)> {
        self.store
            .instances()
            .iter()
            .filter_map(|i| self.surfaces.get(&i.id).map(|s| (i.id.clone(), *s)))
            .collect()
    }

    pub(super) fn destroy_quietly(&mut self, surface: SurfaceId) {
        self.bindings.unbind(surface);
        if let Err(e) = self.host.destroy_surface(surface) {
            log_host_error("destroy", surface, &e);
        }
    }
}

/// Gone surfaces are expected during teardown races; anything else is worth
/// a warning.
pub(super) fn log_host_error(op: &str, surface: SurfaceId, err: &HostError) {
    if err.is_gone() {
        debug!(op, %surface, "surface already gone");
    } else {
        warn!(op, %surface, error = %err, "host call failed");
    }
}
