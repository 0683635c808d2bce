//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::http::header::InvalidHeaderValue;
use axum::response::{IntoResponse, Response};
use picodocs_assets::AssetError;
use picodocs_content::ContentError;
use picodocs_markup::MarkupError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Static asset lookup failed.
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// Page content could not be built.
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Markup could not be serialized.
    #[error("Render error: {0}")]
    Render(#[from] MarkupError),

    /// Configured URL cannot appear in the Content-Security-Policy header.
    #[error("Invalid Content-Security-Policy: {0}")]
    Csp(#[from] InvalidHeaderValue),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Asset(AssetError::StaticAssetNotFound(path)) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Static asset not found", "path": path}),
            ),
            Self::Asset(AssetError::PathTraversal(path)) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Invalid asset path", "path": path}),
            ),
            Self::Asset(AssetError::Io { .. })
            | Self::Content(_)
            | Self::Render(_)
            | Self::Csp(_)
            | Self::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": self.to_string()}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
