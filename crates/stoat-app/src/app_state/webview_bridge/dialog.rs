//! Instance-manager dialog: its own small always-on-top window holding one
//! bundled surface.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowLevel};

use stoat_common::Rect;
use stoat_views::{DialogRequest, SurfaceHost, SurfaceSpec};

use crate::app_state::core::StoatApp;
use crate::app_state::types::{DIALOG_SIZE, DIALOG_TITLE};

fn dialog_attributes() -> WindowAttributes {
    WindowAttributes::default()
        .with_title(DIALOG_TITLE)
        .with_inner_size(LogicalSize::new(DIALOG_SIZE.0, DIALOG_SIZE.1))
        .with_resizable(false)
        .with_window_level(WindowLevel::AlwaysOnTop)
}

/// Full client area of `window` in logical pixels.
fn client_rect(window: &Window) -> Rect {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    Rect {
        x: 0.0,
        y: 0.0,
        width: size.width,
        height: size.height,
    }
}

impl StoatApp {
    /// Show the instance manager, creating it if none is open.
    pub(in crate::app_state) fn open_instance_manager(&mut self, event_loop: &ActiveEventLoop) {
        let Some(views) = self.views.as_mut() else {
            return;
        };

        match views.request_dialog() {
            DialogRequest::Refocused => {
                if let Some(window) = &self.dialog_window {
                    window.focus_window();
                }
            }
            DialogRequest::Unavailable => {
                tracing::debug!("Instance manager unavailable during shutdown");
            }
            DialogRequest::Create => {
                let window = match event_loop.create_window(dialog_attributes()) {
                    Ok(w) => Arc::new(w),
                    Err(e) => {
                        tracing::warn!("Failed to create instance manager window: {e}");
                        views.dialog_failed();
                        return;
                    }
                };

                views.host_mut().set_dialog_window(Some(window.clone()));
                let spec = SurfaceSpec::dialog(client_rect(&window));
                match views.host_mut().create_surface(&spec) {
                    Ok(surface) => {
                        if views.attach_dialog(surface) {
                            tracing::info!(%surface, "Instance manager opened");
                            self.dialog_window = Some(window);
                        } else {
                            views.host_mut().set_dialog_window(None);
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to create instance manager surface");
                        views.dialog_failed();
                        views.host_mut().set_dialog_window(None);
                    }
                }
            }
        }
    }

    /// Destroy the dialog surface, then its window.
    pub(in crate::app_state) fn close_instance_manager(&mut self) {
        if let Some(views) = self.views.as_mut() {
            if let Some(surface) = views.dialog_closed() {
                tracing::info!(%surface, "Instance manager closed");
            }
            views.host_mut().set_dialog_window(None);
        }
        self.dialog_window = None;
    }
}
