//! `SurfaceHost` over real wry webviews.
//!
//! Instance and sidebar surfaces are children of the main window; the
//! dialog surface is a child of the dialog window, which must be set
//! before the view manager asks for it.

use std::sync::Arc;

use serde_json::Value;
use winit::window::Window;

use stoat_common::{HostError, Rect, Size, SurfaceId, SurfaceRole};
use stoat_views::{SurfaceHost, SurfaceSource, SurfaceSpec};
use stoat_webview::{SurfaceConfig, SurfaceRegistry, WebViewHandle};

pub struct WryHost {
    main: Arc<Window>,
    dialog_window: Option<Arc<Window>>,
    registry: SurfaceRegistry,
}

impl WryHost {
    pub fn new(main: Arc<Window>, registry: SurfaceRegistry) -> Self {
        Self {
            main,
            dialog_window: None,
            registry,
        }
    }

    pub fn registry(&self) -> &SurfaceRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut SurfaceRegistry {
        &mut self.registry
    }

    /// Window the next dialog surface is created in.
    pub fn set_dialog_window(&mut self, window: Option<Arc<Window>>) {
        self.dialog_window = window;
    }

    pub fn handle_mut(&mut self, id: SurfaceId) -> Result<&mut WebViewHandle, HostError> {
        self.registry.get_mut(id).ok_or(HostError::Gone(id.0))
    }

    fn handle(&self, id: SurfaceId) -> Result<&WebViewHandle, HostError> {
        self.registry.get(id).ok_or(HostError::Gone(id.0))
    }
}

fn failed(e: wry::Error) -> HostError {
    HostError::Failed(e.to_string())
}

/// wry settings for a surface the view manager asked for.
pub(super) fn surface_config(spec: &SurfaceSpec) -> SurfaceConfig {
    match &spec.source {
        SurfaceSource::Remote(url) => SurfaceConfig {
            role: spec.role,
            ..SurfaceConfig::remote(url.clone())
        },
        SurfaceSource::Bundled(page) => SurfaceConfig::bundled(spec.role, page),
    }
}

impl SurfaceHost for WryHost {
    fn create_surface(&mut self, spec: &SurfaceSpec) -> Result<SurfaceId, HostError> {
        let window = match spec.role {
            SurfaceRole::Dialog => self
                .dialog_window
                .clone()
                .ok_or_else(|| HostError::Unavailable("no dialog window".into()))?,
            SurfaceRole::Instance | SurfaceRole::Sidebar => self.main.clone(),
        };
        let config = surface_config(spec);
        self.registry
            .create(window.as_ref(), spec.bounds, config)
            .map_err(failed)
    }

    fn destroy_surface(&mut self, id: SurfaceId) -> Result<(), HostError> {
        if self.registry.destroy(id) {
            Ok(())
        } else {
            Err(HostError::Gone(id.0))
        }
    }

    fn set_bounds(&mut self, id: SurfaceId, bounds: Rect) -> Result<(), HostError> {
        self.handle(id)?.set_bounds(bounds).map_err(failed)
    }

    fn load_url(&mut self, id: SurfaceId, url: &str) -> Result<(), HostError> {
        self.handle_mut(id)?.load_url(url).map_err(failed)
    }

    fn raise(&mut self, id: SurfaceId) -> Result<(), HostError> {
        // Child webviews have no z-order control; visible surfaces never
        // overlap, so raising only has to make sure the surface is shown.
        self.handle(id)?.set_visible(true).map_err(failed)
    }

    fn focus(&mut self, id: SurfaceId) -> Result<(), HostError> {
        let handle = self.handle(id)?;
        if handle.role() == SurfaceRole::Dialog {
            if let Some(window) = &self.dialog_window {
                window.focus_window();
            }
        }
        handle.focus().map_err(failed)
    }

    fn send(&mut self, id: SurfaceId, channel: &str, payload: &Value) -> Result<(), HostError> {
        self.handle(id)?.send_ipc(channel, payload).map_err(failed)
    }

    fn content_size(&self) -> Size {
        let size = self.main.inner_size().to_logical::<f64>(self.main.scale_factor());
        Size::new(size.width, size.height)
    }
}
