//! Application state.
//!
//! Shared state for all request handlers.

use axum::http::HeaderValue;
use chrono::{DateTime, Utc};
use md5::{Digest, Md5};
use picodocs_assets::Assets;

/// `Last-Modified` header format.
const HTTP_DATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Rendered page.
    pub(crate) html: String,
    /// Quoted ETag of the rendered page.
    pub(crate) etag: String,
    /// Build time as an HTTP date.
    pub(crate) last_modified: String,
    /// Static asset store.
    pub(crate) assets: Assets,
    /// Content-Security-Policy for every response.
    pub(crate) csp: HeaderValue,
}

impl AppState {
    pub(crate) fn new(
        html: String,
        built_at: DateTime<Utc>,
        assets: Assets,
        csp: HeaderValue,
        version: &str,
    ) -> Self {
        let etag = compute_etag(version, &html);
        Self {
            html,
            etag,
            last_modified: built_at.format(HTTP_DATE).to_string(),
            assets,
            csp,
        }
    }
}

/// Compute ETag from version and content.
///
/// Uses MD5 hash of version and content, truncated to 16 characters.
pub(crate) fn compute_etag(version: &str, content: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(version.as_bytes());
    hasher.update(b":");
    hasher.update(content.as_bytes());
    let hash = hasher.finalize();
    format!("\"{}\"", &hex::encode(hash)[..16])
}
