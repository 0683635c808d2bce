//! Static file serving.
//!
//! Every request no route matches is looked up in the asset store. Only
//! `/{path}.{ext}` paths are served; anything else is a 404.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Method, Response, StatusCode, Uri, header};
use axum::response::IntoResponse;
use percent_encoding::percent_decode_str;
use picodocs_assets::{AssetError, mime_for};

use crate::error::ServerError;
use crate::state::AppState;

/// Create router for static file serving.
pub(crate) fn static_router() -> Router<Arc<AppState>> {
    Router::new().fallback(serve_asset)
}

/// Serve a static asset.
async fn serve_asset(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> Result<Response<Body>, ServerError> {
    if method != Method::GET && method != Method::HEAD {
        return Ok(StatusCode::METHOD_NOT_ALLOWED.into_response());
    }

    let path = percent_decode_str(uri.path().trim_start_matches('/')).decode_utf8_lossy();
    if !has_extension(&path) {
        return Err(AssetError::StaticAssetNotFound(path.into_owned()).into());
    }

    let content = state.assets.get(&path).inspect_err(|e| {
        tracing::warn!(path = %path, error = %e, "Static asset request failed");
    })?;

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime_for(&path))
        .body(Body::from(content.into_owned()))
        .unwrap())
}

/// Whether the last path segment has a non-empty stem and extension.
fn has_extension(path: &str) -> bool {
    let name = path.rsplit('/').next().unwrap_or_default();
    name.rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && !ext.is_empty())
}
