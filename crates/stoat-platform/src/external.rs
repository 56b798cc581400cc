//! Handing links to the system's default handler.

use stoat_common::PlatformError;
use url::Url;

/// Schemes that may leave the app.
const EXTERNAL_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Whether `raw` is a URL the system browser/mail client should receive.
pub fn is_external_url(raw: &str) -> bool {
    Url::parse(raw).is_ok_and(|url| EXTERNAL_SCHEMES.contains(&url.scheme()))
}

/// Open `raw` with the system default handler.
///
/// Anything but `http:`, `https:` and `mailto:` is refused.
pub fn open_external(raw: &str) -> Result<(), PlatformError> {
    if !is_external_url(raw) {
        return Err(PlatformError::ExternalHandlerError(format!(
            "refusing to open '{raw}'"
        )));
    }
    open::that(raw).map_err(|e| PlatformError::ExternalHandlerError(format!("{raw}: {e}")))?;
    tracing::info!(url = %raw, "opened in external handler");
    Ok(())
}
