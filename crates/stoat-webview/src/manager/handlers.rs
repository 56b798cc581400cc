use std::sync::{Arc, Mutex};

use stoat_common::{OriginBindings, SurfaceId};
use tracing::{debug, info, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::WebViewManager;

// =============================================================================
// POLICY
// =============================================================================

/// Top-level navigation guard: the target must share the surface's bound
/// origin. Unbound surfaces may not navigate anywhere.
pub fn is_navigation_allowed(bindings: &OriginBindings, surface: SurfaceId, url: &str) -> bool {
    bindings.allows(surface, url)
}

/// What a new-window request turns into: the URL to open externally, or
/// `None` to drop it. No embedded window is ever created.
pub fn new_window_target(url: &str) -> Option<&str> {
    stoat_platform::is_external_url(url).then_some(url)
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        surface: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            // Validate that the IPC body is valid JSON before forwarding
            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(
                    %surface,
                    body_len = body.len(),
                    "IPC message rejected: invalid JSON"
                );
                return;
            }

            debug!(%surface, body_len = body.len(), "IPC message from JS");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::IpcMessage { surface, body });
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        surface: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(%surface, ?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::PageLoad {
                    surface,
                    state,
                    url,
                });
            }
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        surface: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::TitleChanged { surface, title });
            }
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        bindings: OriginBindings,
        surface: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if is_navigation_allowed(&bindings, surface, &url) {
                return true;
            }
            warn!(%surface, url = %url, "navigation blocked: origin mismatch");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::NavigationBlocked { surface, url });
            }
            false
        })
    }

    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        surface: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            match new_window_target(&url) {
                Some(target) => {
                    info!(%surface, url = %target, "deflecting new window to system handler");
                    if let Ok(mut evts) = events.lock() {
                        evts.push(WebViewEvent::OpenExternal {
                            surface,
                            url: target.to_string(),
                        });
                    }
                }
                None => debug!(%surface, url = %url, "new window denied"),
            }
            false
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
