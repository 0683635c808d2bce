//! Page endpoint.
//!
//! Serves the page rendered at startup, with `ETag` revalidation.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Handle GET /.
pub(crate) async fn get_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    // Check If-None-Match header for conditional request
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == state.etag.as_bytes()
    {
        return StatusCode::NOT_MODIFIED.into_response();
    }

    (
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::ETAG, state.etag.as_str()),
            (header::LAST_MODIFIED, state.last_modified.as_str()),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        state.html.clone(),
    )
        .into_response()
}
