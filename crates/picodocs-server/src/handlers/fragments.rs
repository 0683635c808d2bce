//! htmx fragment endpoints.

use axum::http::HeaderMap;
use axum::response::Html;
use picodocs_content::modal::{close_modal_fragment, modal_fragment};
use picodocs_content::theme::ThemeToggle;

use crate::error::ServerError;

/// Header htmx sets to the `name` of the triggering element.
const HX_TRIGGER_NAME: &str = "hx-trigger-name";

/// Handle POST /toggle_theme.
///
/// A missing or unrecognized trigger name is not an error: the toggle
/// applies no theme and offers dark next.
pub(crate) async fn toggle_theme(headers: HeaderMap) -> Result<Html<String>, ServerError> {
    let trigger_name = headers
        .get(HX_TRIGGER_NAME)
        .and_then(|value| value.to_str().ok());
    let toggle = ThemeToggle::from_trigger_name(trigger_name);

    if toggle.applied.is_none() {
        tracing::warn!(
            present = headers.contains_key(HX_TRIGGER_NAME),
            "Theme toggle without a recognized theme, defaulting to dark"
        );
    }
    tracing::debug!(applied = ?toggle.applied, next = %toggle.next, "Toggle theme");

    Ok(Html(toggle.fragment().render()?))
}

/// Handle GET /modal.
pub(crate) async fn modal() -> Result<Html<String>, ServerError> {
    tracing::debug!("Open modal");
    Ok(Html(modal_fragment().render()?))
}

/// Handle GET /close_modal.
pub(crate) async fn close_modal() -> Result<Html<String>, ServerError> {
    tracing::debug!("Close modal");
    Ok(Html(close_modal_fragment().render()?))
}
