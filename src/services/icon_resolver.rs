//! Bookmark icon resolution.
//!
//! A bookmark without an explicit icon gets `<origin>/favicon.ico`. URLs
//! without a usable origin leave the icon empty, and the presentation layer
//! falls back to [`avatar_url`].

use tracing::debug;
use url::{form_urlencoded, Url};

use crate::types::errors::IconError;

const AVATAR_ENDPOINT: &str = "https://ui-avatars.com/api/";

/// Derives the conventional favicon location for a page URL.
pub fn favicon_for(page_url: &str) -> Result<String, IconError> {
    let parsed = Url::parse(page_url.trim())
        .map_err(|e| IconError::MalformedUrl(format!("{}: {}", page_url, e)))?;

    let origin = parsed.origin();
    if !origin.is_tuple() {
        return Err(IconError::MalformedUrl(format!("{}: opaque origin", page_url)));
    }
    Ok(format!("{}/favicon.ico", origin.ascii_serialization()))
}

/// Picks the icon to store: the supplied one if non-blank, otherwise the
/// derived favicon, otherwise an empty string.
pub fn resolve_icon(icon: &str, page_url: &str) -> String {
    let icon = icon.trim();
    if !icon.is_empty() {
        return icon.to_string();
    }
    match favicon_for(page_url) {
        Ok(favicon) => favicon,
        Err(e) => {
            debug!(error = %e, "favicon derivation failed, leaving icon empty");
            String::new()
        }
    }
}

/// Generated avatar shown in place of an empty or broken icon.
pub fn avatar_url(name: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(name.as_bytes()).collect();
    format!(
        "{}?name={}&background=random&color=fff&size=128",
        AVATAR_ENDPOINT, encoded
    )
}
