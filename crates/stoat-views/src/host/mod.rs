//! The capability the view manager drives.
//!
//! A [`SurfaceHost`] owns the real embedded surfaces (wry webviews in the
//! app, a recording double in tests). Every call names a surface by its
//! host-assigned [`SurfaceId`]; ids are never reused.

#[cfg(test)]
pub(crate) mod recording;

use serde_json::Value;
use stoat_common::{HostError, Rect, Size, SurfaceId, SurfaceRole, DIALOG_PAGE, SIDEBAR_PAGE};

/// Channel carrying the full config to content surfaces.
pub const CHANNEL_CONFIG: &str = "config";
/// Channel carrying the instances snapshot to the sidebar and dialog.
pub const CHANNEL_INSTANCES_CHANGED: &str = "instances-changed";
/// Channel carrying add/edit validation errors to the dialog.
pub const CHANNEL_INSTANCE_ERROR: &str = "instance-error";

/// Where a surface loads its content from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceSource {
    /// An instance endpoint.
    Remote(String),
    /// A page served by the app's own asset protocol.
    Bundled(&'static str),
}

/// Everything the host needs to create a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSpec {
    pub role: SurfaceRole,
    pub source: SurfaceSource,
    pub bounds: Rect,
}

impl SurfaceSpec {
    /// A content surface for an instance, created parked.
    pub fn instance(url: impl Into<String>) -> Self {
        Self {
            role: SurfaceRole::Instance,
            source: SurfaceSource::Remote(url.into()),
            bounds: Rect::PARKED,
        }
    }

    pub fn sidebar() -> Self {
        Self {
            role: SurfaceRole::Sidebar,
            source: SurfaceSource::Bundled(SIDEBAR_PAGE),
            bounds: Rect::PARKED,
        }
    }

    pub fn dialog(bounds: Rect) -> Self {
        Self {
            role: SurfaceRole::Dialog,
            source: SurfaceSource::Bundled(DIALOG_PAGE),
            bounds,
        }
    }
}

/// Windowing/rendering runtime as seen by the view manager.
pub trait SurfaceHost {
    fn create_surface(&mut self, spec: &SurfaceSpec) -> Result<SurfaceId, HostError>;

    fn destroy_surface(&mut self, id: SurfaceId) -> Result<(), HostError>;

    fn set_bounds(&mut self, id: SurfaceId, bounds: Rect) -> Result<(), HostError>;

    /// Navigate the surface to `url`.
    fn load_url(&mut self, id: SurfaceId, url: &str) -> Result<(), HostError>;

    /// Move the surface to the top of the paint order.
    fn raise(&mut self, id: SurfaceId) -> Result<(), HostError>;

    fn focus(&mut self, id: SurfaceId) -> Result<(), HostError>;

    /// Post a JSON message on `channel` to the surface.
    fn send(&mut self, id: SurfaceId, channel: &str, payload: &Value) -> Result<(), HostError>;

    /// Current content area of the main window.
    fn content_size(&self) -> Size;
}
