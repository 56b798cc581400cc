//! Trusted origins and the surface → origin binding table.
//!
//! Every surface is locked to one origin at creation. The navigation guard
//! consults [`OriginBindings`] on each top-level navigation; the view
//! registry rebinds on cross-origin edits and unbinds on removal.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use url::Url;

use crate::types::SurfaceId;

/// URL prefixes served by the bundled `stoat://` protocol.
///
/// WebView2 rewrites custom protocols: `stoat://localhost/…` → `http://stoat.localhost/…`.
pub const BUNDLED_PREFIXES: &[&str] = &["stoat://localhost/", "http://stoat.localhost/"];

/// Custom protocol scheme for bundled pages.
pub const BUNDLED_SCHEME: &str = "stoat";

/// Bundled page rendered by the sidebar surface.
pub const SIDEBAR_PAGE: &str = "sidebar/index.html";
/// Bundled page rendered by the instance-manager dialog.
pub const DIALOG_PAGE: &str = "instance-manager/index.html";

/// URL a webview must load to reach bundled `path` on this platform.
pub fn bundled_url(path: &str) -> String {
    let path = path.trim_start_matches('/');
    if cfg!(target_os = "windows") {
        format!("http://{BUNDLED_SCHEME}.localhost/{path}")
    } else {
        format!("{BUNDLED_SCHEME}://localhost/{path}")
    }
}

/// The origin a surface is allowed to navigate within.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrustedOrigin {
    /// A `scheme://host[:port]` origin.
    Tuple(String),
    /// An unparsable URL or one with an opaque origin. Never matches anything.
    Opaque(String),
    /// Bundled application assets (sidebar, instance manager).
    Bundled,
}

impl TrustedOrigin {
    /// Derive the origin of `raw`, falling back to an opaque origin holding
    /// the literal string.
    pub fn from_url(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) => {
                let origin = url.origin();
                if origin.is_tuple() {
                    TrustedOrigin::Tuple(origin.ascii_serialization())
                } else {
                    TrustedOrigin::Opaque(raw.to_string())
                }
            }
            Err(_) => TrustedOrigin::Opaque(raw.to_string()),
        }
    }

    /// Whether a top-level navigation to `url` stays inside this origin.
    pub fn allows(&self, url: &str) -> bool {
        match self {
            TrustedOrigin::Tuple(expected) => {
                matches!(TrustedOrigin::from_url(url), TrustedOrigin::Tuple(ref actual) if actual == expected)
            }
            TrustedOrigin::Opaque(_) => false,
            TrustedOrigin::Bundled => BUNDLED_PREFIXES.iter().any(|p| url.starts_with(p)),
        }
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, TrustedOrigin::Opaque(_))
    }
}

/// Shared, thread-safe `SurfaceId → TrustedOrigin` table.
///
/// Cloning yields another handle to the same table.
#[derive(Debug, Clone, Default)]
pub struct OriginBindings {
    inner: Arc<RwLock<HashMap<SurfaceId, TrustedOrigin>>>,
}

impl OriginBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&self, surface: SurfaceId, origin: TrustedOrigin) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(surface, origin);
        }
    }

    pub fn unbind(&self, surface: SurfaceId) -> Option<TrustedOrigin> {
        self.inner.write().ok().and_then(|mut map| map.remove(&surface))
    }

    pub fn get(&self, surface: SurfaceId) -> Option<TrustedOrigin> {
        self.inner
            .read()
            .ok()
            .and_then(|map| map.get(&surface).cloned())
    }

    /// Navigation check. Unbound surfaces are denied.
    pub fn allows(&self, surface: SurfaceId, url: &str) -> bool {
        self.inner
            .read()
            .map(|map| map.get(&surface).is_some_and(|o| o.allows(url)))
            .unwrap_or(false)
    }

    pub fn clear(&self) {
        if let Ok(mut map) = self.inner.write() {
            map.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_origin_ignores_path_and_query() {
        let origin = TrustedOrigin::from_url("https://x.test/path?q=1");
        assert_eq!(origin, TrustedOrigin::Tuple("https://x.test".into()));
    }

    #[test]
    fn tuple_origin_keeps_non_default_port() {
        let origin = TrustedOrigin::from_url("http://localhost:8080/app");
        assert_eq!(origin, TrustedOrigin::Tuple("http://localhost:8080".into()));
    }

    #[test]
    fn same_origin_navigation_is_allowed() {
        let origin = TrustedOrigin::from_url("https://x.test");
        assert!(origin.allows("https://x.test/channels/123"));
        assert!(origin.allows("https://x.test:443/login"));
    }

    #[test]
    fn cross_origin_navigation_is_blocked() {
        let origin = TrustedOrigin::from_url("https://x.test");
        assert!(!origin.allows("https://evil.test/"));
        assert!(!origin.allows("http://x.test/"));
        assert!(!origin.allows("https://sub.x.test/"));
        assert!(!origin.allows("javascript:alert(1)"));
        assert!(!origin.allows("not a url"));
    }

    #[test]
    fn malformed_url_falls_back_to_opaque_literal() {
        let origin = TrustedOrigin::from_url("x.test/no-scheme");
        assert_eq!(origin, TrustedOrigin::Opaque("x.test/no-scheme".into()));
        assert!(origin.is_opaque());
    }

    #[test]
    fn opaque_origin_never_matches() {
        let origin = TrustedOrigin::from_url("garbage");
        assert!(!origin.allows("garbage"));
        assert!(!origin.allows("https://x.test"));

        let data = TrustedOrigin::from_url("data:text/html,hi");
        assert!(data.is_opaque());
        assert!(!data.allows("data:text/html,hi"));
    }

    #[test]
    fn bundled_origin_allows_only_app_assets() {
        let origin = TrustedOrigin::Bundled;
        assert!(origin.allows("stoat://localhost/sidebar/index.html"));
        assert!(origin.allows("http://stoat.localhost/instance-manager/index.html"));
        assert!(!origin.allows("https://x.test/"));
        assert!(!origin.allows("file:///etc/passwd"));
    }

    #[test]
    fn bundled_urls_pass_the_bundled_origin() {
        let url = bundled_url(SIDEBAR_PAGE);
        assert!(url.ends_with("/sidebar/index.html"));
        assert!(TrustedOrigin::Bundled.allows(&url));
        assert_eq!(bundled_url("/x.html"), bundled_url("x.html"));
    }

    #[test]
    fn bindings_gate_navigation_per_surface() {
        let bindings = OriginBindings::new();
        bindings.bind(SurfaceId(1), TrustedOrigin::from_url("https://x.test"));
        bindings.bind(SurfaceId(2), TrustedOrigin::from_url("https://y.test"));

        assert!(bindings.allows(SurfaceId(1), "https://x.test/a"));
        assert!(!bindings.allows(SurfaceId(1), "https://y.test/a"));
        assert!(bindings.allows(SurfaceId(2), "https://y.test/a"));
    }

    #[test]
    fn unbound_surface_is_denied() {
        let bindings = OriginBindings::new();
        assert!(!bindings.allows(SurfaceId(9), "https://x.test"));
    }

    #[test]
    fn clones_share_the_table() {
        let bindings = OriginBindings::new();
        let guard_view = bindings.clone();
        bindings.bind(SurfaceId(1), TrustedOrigin::from_url("https://x.test"));
        assert!(guard_view.allows(SurfaceId(1), "https://x.test/"));

        bindings.bind(SurfaceId(1), TrustedOrigin::from_url("https://z.test"));
        assert!(!guard_view.allows(SurfaceId(1), "https://x.test/"));
        assert!(guard_view.allows(SurfaceId(1), "https://z.test/"));

        assert!(bindings.unbind(SurfaceId(1)).is_some());
        assert!(guard_view.is_empty());
    }
}
