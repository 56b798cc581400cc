//! Zoom and reload applied to one surface.

use stoat_common::{Action, SurfaceId};
use stoat_webview::WebViewHandle;

use crate::app_state::core::StoatApp;

/// Whether `action` acts on a single surface rather than the app.
pub(in crate::app_state) fn is_surface_action(action: &Action) -> bool {
    matches!(
        action,
        Action::ZoomIn | Action::ZoomOut | Action::ZoomReset | Action::Reload
    )
}

fn apply(handle: &mut WebViewHandle, action: &Action) -> Result<(), wry::Error> {
    match action {
        Action::ZoomIn => handle.zoom_in(),
        Action::ZoomOut => handle.zoom_out(),
        Action::ZoomReset => handle.zoom_reset(),
        Action::Reload => handle.reload(),
        _ => Ok(()),
    }
}

impl StoatApp {
    pub(in crate::app_state) fn apply_surface_action(&mut self, surface: SurfaceId, action: &Action) {
        let Some(views) = self.views.as_mut() else {
            return;
        };
        let handle = match views.host_mut().handle_mut(surface) {
            Ok(handle) => handle,
            Err(e) => {
                tracing::debug!(%surface, error = %e, "Surface action dropped");
                return;
            }
        };
        match apply(handle, action) {
            Ok(()) => tracing::debug!(
                %surface,
                ?action,
                zoom = handle.zoom_level().level(),
                "Surface action applied"
            ),
            Err(e) => tracing::warn!(%surface, ?action, error = %e, "Surface action failed"),
        }
    }

    /// Zoom/reload the active instance.
    pub(in crate::app_state) fn apply_to_active_surface(&mut self, action: &Action) {
        if let Some(surface) = self.views.as_ref().and_then(|v| v.active_surface()) {
            self.apply_surface_action(surface, action);
        }
    }
}
