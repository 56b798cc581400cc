use stoat_common::{bundled_url, SurfaceRole, TrustedOrigin};

/// Configuration for creating a surface's WebView.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    pub role: SurfaceRole,
    /// Initial URL.
    pub url: String,
    /// Dev tools (debug builds only by default).
    pub devtools: bool,
    pub clipboard: bool,
    pub user_agent: Option<String>,
    /// Hide until the first layout pass places the surface.
    pub visible: bool,
}

impl SurfaceConfig {
    /// An instance surface loading a remote endpoint.
    pub fn remote(url: impl Into<String>) -> Self {
        Self {
            role: SurfaceRole::Instance,
            url: url.into(),
            devtools: cfg!(debug_assertions),
            clipboard: true,
            user_agent: None,
            visible: true,
        }
    }

    /// A sidebar or dialog surface loading a bundled page.
    pub fn bundled(role: SurfaceRole, page: &str) -> Self {
        Self {
            role,
            url: bundled_url(page),
            ..Self::remote(String::new())
        }
    }

    /// The origin the surface is locked to.
    pub fn origin(&self) -> TrustedOrigin {
        match self.role {
            SurfaceRole::Instance => TrustedOrigin::from_url(&self.url),
            SurfaceRole::Sidebar | SurfaceRole::Dialog => TrustedOrigin::Bundled,
        }
    }

    /// Only auxiliary surfaces may reach the `stoat://` protocol.
    pub fn serves_bundled(&self) -> bool {
        self.role != SurfaceRole::Instance
    }
}
