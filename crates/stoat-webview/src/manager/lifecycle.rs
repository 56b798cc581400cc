use std::borrow::Cow;
use std::sync::Arc;

use stoat_common::{Rect, SurfaceId, BUNDLED_SCHEME};
use tracing::{debug, warn};
use wry::http::Response;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::ContentProvider;
use crate::ipc::{init_script, KEY_INTERCEPT_SCRIPT};

use super::handle::{to_wry_rect, WebViewHandle};
use super::types::SurfaceConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a surface's WebView as a child of `window`.
    ///
    /// The surface is bound to its origin before the first navigation so
    /// the guard can vet the initial load.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        surface: SurfaceId,
        window: &W,
        bounds: Rect,
        config: SurfaceConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        self.bindings.bind(surface, config.origin());

        let bridge = init_script();
        let mut builder = WebViewBuilder::new()
            .with_bounds(to_wry_rect(&bounds))
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_incognito(false)
            .with_visible(config.visible)
            .with_focused(false)
            .with_initialization_script(&bridge)
            .with_initialization_script(KEY_INTERCEPT_SCRIPT);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&self.events), surface);
        builder = Self::attach_page_load_handler(builder, Arc::clone(&self.events), surface);
        builder = Self::attach_title_handler(builder, Arc::clone(&self.events), surface);
        builder = Self::attach_navigation_handler(
            builder,
            Arc::clone(&self.events),
            self.bindings.clone(),
            surface,
        );
        builder = Self::attach_new_window_handler(builder, Arc::clone(&self.events), surface);

        if config.serves_bundled() {
            builder = self.attach_custom_protocol(builder);
        }

        builder = builder.with_url(&config.url);

        let webview = match builder.build_as_child(window) {
            Ok(webview) => webview,
            Err(e) => {
                self.bindings.unbind(surface);
                return Err(e);
            }
        };

        debug!(%surface, role = ?config.role, url = %config.url, "WebView created");

        Ok(WebViewHandle {
            webview,
            surface,
            role: config.role,
            current_url: config.url,
            current_title: String::new(),
            zoom: Default::default(),
        })
    }

    /// Set the content provider for serving bundled assets via `stoat://`.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    fn attach_custom_protocol<'a>(&self, builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        let Some(provider) = &self.content_provider else {
            return builder;
        };
        let cp = Arc::clone(provider);
        builder.with_custom_protocol(BUNDLED_SCHEME.to_string(), move |_wv_id, request| {
            let uri = request.uri().to_string();
            let path = ContentProvider::request_path(&uri);

            match cp.resolve(path) {
                Some((mime, data)) => respond(200, &mime, data.into_owned()),
                None => {
                    warn!(path = %path, "custom protocol: asset not found");
                    respond(404, "text/plain", b"Not Found".to_vec())
                }
            }
        })
    }
}

fn respond(status: u16, mime: &str, body: Vec<u8>) -> Response<Cow<'static, [u8]>> {
    Response::builder()
        .status(status)
        .header("Content-Type", mime)
        .body(Cow::from(body))
        .unwrap_or_else(|_| Response::new(Cow::from(Vec::new())))
}
