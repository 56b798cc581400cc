//! Bundled content served through the `stoat://` custom protocol.
//!
//! The sidebar and instance-manager pages are compiled into the binary;
//! an optional asset directory can supply or replace other files.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use stoat_common::{DIALOG_PAGE, SIDEBAR_PAGE};

const SIDEBAR_HTML: &str = include_str!("../../../assets/sidebar/index.html");
const DIALOG_HTML: &str = include_str!("../../../assets/instance-manager/index.html");

/// Serves bundled pages and files under a base directory.
///
/// A request for `stoat://localhost/sidebar/index.html` resolves the
/// in-memory page first, then `{base_dir}/sidebar/index.html`.
pub struct ContentProvider {
    /// Base directory for resolving asset paths.
    base_dir: PathBuf,
    /// In-memory overrides (for dynamically generated content).
    overrides: HashMap<String, (String, Vec<u8>)>, // path -> (mime, data)
}

impl ContentProvider {
    /// Create a new content provider rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            overrides: HashMap::new(),
        }
    }

    /// A provider holding the compiled-in sidebar and dialog pages.
    pub fn bundled(base_dir: impl Into<PathBuf>) -> Self {
        let mut provider = Self::new(base_dir);
        provider.add_override(SIDEBAR_PAGE, "text/html", SIDEBAR_HTML);
        provider.add_override(DIALOG_PAGE, "text/html", DIALOG_HTML);
        provider
    }

    /// Strip the protocol prefix from a request URI, leaving the asset
    /// path. Handles the WebView2 `http://stoat.localhost/` rewrite.
    pub fn request_path(uri: &str) -> &str {
        let path = uri
            .strip_prefix("stoat://localhost")
            .or_else(|| uri.strip_prefix("http://stoat.localhost"))
            .or_else(|| uri.strip_prefix("stoat://"))
            .unwrap_or("");
        let path = path.split(['?', '#']).next().unwrap_or("");
        path.trim_start_matches('/')
    }

    /// Register an in-memory asset override.
    pub fn add_override(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        self.overrides
            .insert(path.into(), (mime.into(), data.into()));
    }

    /// Resolve a request path to content bytes and MIME type.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.trim_start_matches('/');

        // Check overrides first
        if let Some((mime, data)) = self.overrides.get(clean) {
            return Some((Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())));
        }

        // Resolve from filesystem
        let file_path = self.base_dir.join(clean);

        // Prevent directory traversal (including symlink bypass).
        // Canonicalize both paths to resolve symlinks, `..`, etc.
        let canonical_base = std::fs::canonicalize(&self.base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((Cow::Owned(mime.to_string()), Cow::Owned(data)))
    }

    /// The base directory for assets.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("webp") => "image/webp",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Path to the assets directory at the workspace root.
    fn assets_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent() // crates/
            .unwrap()
            .parent() // workspace root
            .unwrap()
            .join("assets")
    }

    fn scratch() -> (TempDir, ContentProvider) {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("pages")).unwrap();
        std::fs::write(dir.path().join("pages/hello.html"), "<p>hi</p>").unwrap();
        std::fs::write(dir.path().join("style.css"), "body{}").unwrap();
        let cp = ContentProvider::new(dir.path());
        (dir, cp)
    }

    // -----------------------------------------------------------------
    // Bundled pages
    // -----------------------------------------------------------------

    #[test]
    fn bundled_sidebar_resolves_without_disk() {
        let cp = ContentProvider::bundled("/nonexistent");
        let (mime, data) = cp.resolve(SIDEBAR_PAGE).unwrap();
        assert_eq!(mime.as_ref(), "text/html");
        let html = String::from_utf8_lossy(&data);
        assert!(html.contains("switch_instance"));
        assert!(html.contains("open_instance_manager"));
    }

    #[test]
    fn bundled_dialog_resolves_without_disk() {
        let cp = ContentProvider::bundled("/nonexistent");
        let (_, data) = cp.resolve(DIALOG_PAGE).unwrap();
        let html = String::from_utf8_lossy(&data);
        for kind in ["add_instance", "edit_instance", "remove_instance", "close_instance_manager"] {
            assert!(html.contains(kind), "dialog must post {kind}");
        }
        assert!(html.contains("instance-error"));
    }

    #[test]
    fn bundled_pages_match_asset_files() {
        let cp = ContentProvider::new(assets_dir());
        let (_, on_disk) = cp.resolve(SIDEBAR_PAGE).unwrap();
        assert_eq!(on_disk.as_ref(), SIDEBAR_HTML.as_bytes());
    }

    #[test]
    fn bundled_pages_never_inject_user_data_as_html() {
        for html in [SIDEBAR_HTML, DIALOG_HTML] {
            assert!(!html.contains("innerHTML"));
        }
    }

    // -----------------------------------------------------------------
    // Request paths
    // -----------------------------------------------------------------

    #[test]
    fn request_path_strips_scheme_variants() {
        assert_eq!(
            ContentProvider::request_path("stoat://localhost/sidebar/index.html"),
            "sidebar/index.html"
        );
        assert_eq!(
            ContentProvider::request_path("http://stoat.localhost/sidebar/index.html"),
            "sidebar/index.html"
        );
        assert_eq!(
            ContentProvider::request_path("stoat://localhost/a.html?x=1#top"),
            "a.html"
        );
        assert_eq!(ContentProvider::request_path("https://evil.test/a.html"), "");
    }

    // -----------------------------------------------------------------
    // Filesystem resolution
    // -----------------------------------------------------------------

    #[test]
    fn resolves_files_under_base() {
        let (_dir, cp) = scratch();
        let (mime, data) = cp.resolve("pages/hello.html").unwrap();
        assert_eq!(mime.as_ref(), "text/html");
        assert_eq!(data.as_ref(), b"<p>hi</p>");
        assert_eq!(cp.resolve("style.css").unwrap().0.as_ref(), "text/css");
    }

    #[test]
    fn resolve_with_leading_slash() {
        let (_dir, cp) = scratch();
        assert!(cp.resolve("/pages/hello.html").is_some());
    }

    #[test]
    fn nonexistent_file_returns_none() {
        let (_dir, cp) = scratch();
        assert!(cp.resolve("pages/does_not_exist.html").is_none());
    }

    // -----------------------------------------------------------------
    // Security: directory traversal
    // -----------------------------------------------------------------

    #[test]
    fn traversal_with_dotdot_is_blocked() {
        let (dir, _) = scratch();
        std::fs::write(dir.path().join("secret.txt"), "x").unwrap();
        let cp = ContentProvider::new(dir.path().join("pages"));
        assert!(cp.resolve("../secret.txt").is_none());
        assert!(cp.resolve("../../etc/passwd").is_none());
    }

    #[test]
    fn traversal_with_absolute_path_is_blocked() {
        let (_dir, cp) = scratch();
        assert!(cp.resolve("/etc/passwd").is_none());
    }

    #[test]
    fn nested_traversal_is_blocked() {
        let (_dir, cp) = scratch();
        assert!(cp.resolve("pages/../../../etc/passwd").is_none());
    }

    // -----------------------------------------------------------------
    // MIME types
    // -----------------------------------------------------------------

    #[test]
    fn mime_types_by_extension() {
        assert_eq!(mime_from_extension(Path::new("test.html")), "text/html");
        assert_eq!(mime_from_extension(Path::new("test.htm")), "text/html");
        assert_eq!(mime_from_extension(Path::new("style.css")), "text/css");
        assert_eq!(mime_from_extension(Path::new("app.js")), "application/javascript");
        assert_eq!(mime_from_extension(Path::new("icon.svg")), "image/svg+xml");
    }

    #[test]
    fn mime_type_unknown_is_octet_stream() {
        assert_eq!(
            mime_from_extension(Path::new("data.xyz")),
            "application/octet-stream"
        );
    }

    // -----------------------------------------------------------------
    // In-memory overrides
    // -----------------------------------------------------------------

    #[test]
    fn override_takes_precedence() {
        let (_dir, mut cp) = scratch();
        cp.add_override("pages/hello.html", "text/html", b"<p>override</p>".to_vec());
        let (_, data) = cp.resolve("pages/hello.html").unwrap();
        assert_eq!(data.as_ref(), b"<p>override</p>");
    }
}
