use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config persist error: {0}")]
    PersistError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("keybind error: {0}")]
    KeybindError(String),

    #[error("external handler error: {0}")]
    ExternalHandlerError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

/// Failures reported by the host windowing/rendering runtime.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The surface was already destroyed (or never existed on the host side).
    #[error("surface {0} is gone")]
    Gone(u32),

    /// The host is not ready to create surfaces (no window yet, or shut down).
    #[error("host unavailable: {0}")]
    Unavailable(String),

    #[error("host operation failed: {0}")]
    Failed(String),
}

impl HostError {
    /// Whether this error only says the target no longer exists.
    pub fn is_gone(&self) -> bool {
        matches!(self, HostError::Gone(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoatError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("duplicate instance id 'a'".into());
        assert_eq!(
            err.to_string(),
            "config validation error: duplicate instance id 'a'"
        );

        let err = ConfigError::PersistError("disk full".into());
        assert_eq!(err.to_string(), "config persist error: disk full");
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::ExternalHandlerError("no browser".into());
        assert_eq!(err.to_string(), "external handler error: no browser");

        let err = PlatformError::NotSupported("dock badge".into());
        assert_eq!(err.to_string(), "not supported: dock badge");
    }

    #[test]
    fn host_error_gone_is_detected() {
        assert!(HostError::Gone(3).is_gone());
        assert!(!HostError::Failed("boom".into()).is_gone());
        assert!(!HostError::Unavailable("no window".into()).is_gone());
        assert_eq!(HostError::Gone(3).to_string(), "surface 3 is gone");
    }

    #[test]
    fn stoat_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: StoatError = config_err.into();
        assert!(matches!(err, StoatError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn stoat_error_from_host() {
        let err: StoatError = HostError::Unavailable("no window".into()).into();
        assert!(matches!(err, StoatError::Host(_)));
        assert!(err.to_string().contains("no window"));
    }

    #[test]
    fn stoat_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: StoatError = io_err.into();
        assert!(matches!(err, StoatError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn stoat_error_other_variants() {
        let err = StoatError::WebView("js error".into());
        assert_eq!(err.to_string(), "webview error: js error");

        let err = StoatError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
