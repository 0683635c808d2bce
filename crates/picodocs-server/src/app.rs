//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use picodocs_content::modal::{CLOSE_MODAL_ROUTE, MODAL_ROUTE};
use picodocs_content::theme::TOGGLE_THEME_ROUTE;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let csp = state.csp.clone();
    let router = Router::new()
        .route("/", get(handlers::page::get_page))
        .route(TOGGLE_THEME_ROUTE, post(handlers::fragments::toggle_theme))
        .route(MODAL_ROUTE, get(handlers::fragments::modal))
        .route(CLOSE_MODAL_ROUTE, get(handlers::fragments::close_modal))
        .merge(static_files::static_router());

    security::SECURITY_HEADERS
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(security::header_layer(name, value))
        })
        .layer(security::csp_layer(csp))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use axum::response::Response;
    use chrono::Utc;
    use picodocs_assets::Assets;
    use picodocs_content::ContentOptions;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    const PAGE: &str = "<!doctype html><html><body>docs</body></html>";

    fn router(dir: &std::path::Path) -> Router {
        let csp = security::content_security_policy(&ContentOptions::default()).unwrap();
        let state = AppState::new(PAGE.to_owned(), Utc::now(), Assets::from_dir(dir), csp, "1.0.0");
        create_router(Arc::new(state))
    }

    fn static_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("style")).unwrap();
        std::fs::write(dir.path().join("style/single-page.css"), "main { gap: 1rem; }").unwrap();
        dir
    }

    async fn send(router: Router, request: Request<Body>) -> Response {
        router.oneshot(request).await.unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_page_served_with_cache_headers() {
        let dir = static_dir();
        let response = send(router(dir.path()), get_request("/")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::CONTENT_TYPE], "text/html; charset=utf-8");
        assert_eq!(headers[header::CACHE_CONTROL], "no-cache");
        assert_eq!(headers[header::ETAG].len(), 18);
        assert!(headers[header::LAST_MODIFIED].to_str().unwrap().ends_with(" GMT"));
        assert_eq!(body_string(response).await, PAGE);
    }

    #[tokio::test]
    async fn test_page_if_none_match_returns_not_modified() {
        let dir = static_dir();
        let first = send(router(dir.path()), get_request("/")).await;
        let etag = first.headers()[header::ETAG].clone();

        let request = Request::get("/")
            .header(header::IF_NONE_MATCH, etag)
            .body(Body::empty())
            .unwrap();
        let response = send(router(dir.path()), request).await;

        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
        assert!(body_string(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_page_stale_etag_returns_page() {
        let dir = static_dir();
        let request = Request::get("/")
            .header(header::IF_NONE_MATCH, "\"0000000000000000\"")
            .body(Body::empty())
            .unwrap();
        let response = send(router(dir.path()), request).await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_security_headers_on_every_response() {
        let dir = static_dir();
        for uri in ["/", "/modal", "/missing.css"] {
            let response = send(router(dir.path()), get_request(uri)).await;
            let headers = response.headers();
            let csp = headers["content-security-policy"].to_str().unwrap();
            assert!(csp.contains("https://cdn.jsdelivr.net"), "{uri}");
            assert_eq!(headers["x-content-type-options"], "nosniff", "{uri}");
            assert_eq!(headers["x-frame-options"], "DENY", "{uri}");
        }
    }

    fn toggle_request(trigger_name: Option<&str>) -> Request<Body> {
        let mut builder = Request::post("/toggle_theme");
        if let Some(name) = trigger_name {
            builder = builder.header("HX-Trigger-Name", name);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_toggle_theme_to_dark() {
        let dir = static_dir();
        let response = send(router(dir.path()), toggle_request(Some("theme-toggle(dark)"))).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains(r#"name="theme-toggle(light)""#));
        assert!(html.contains("Make light!"));
        assert!(html.contains("setAttribute('data-theme', 'dark')"));
    }

    #[tokio::test]
    async fn test_toggle_theme_to_light() {
        let dir = static_dir();
        let response = send(router(dir.path()), toggle_request(Some("theme-toggle(light)"))).await;

        let html = body_string(response).await;
        assert!(html.contains(r#"name="theme-toggle(dark)""#));
        assert!(html.contains("setAttribute('data-theme', 'light')"));
    }

    #[tokio::test]
    async fn test_toggle_theme_missing_header_defaults_to_dark() {
        let dir = static_dir();
        let response = send(router(dir.path()), toggle_request(None)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Make dark!"));
        assert!(html.contains("setAttribute('data-theme', '')"));
    }

    #[tokio::test]
    async fn test_toggle_theme_unknown_value_not_echoed() {
        let dir = static_dir();
        let response =
            send(router(dir.path()), toggle_request(Some("theme-toggle(<b>x</b>)"))).await;

        let html = body_string(response).await;
        assert!(!html.contains("<b>"));
        assert!(html.contains("Make dark!"));
    }

    #[tokio::test]
    async fn test_toggle_theme_rejects_get() {
        let dir = static_dir();
        let response = send(router(dir.path()), get_request("/toggle_theme")).await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_modal_fragments() {
        let dir = static_dir();
        let open = send(router(dir.path()), get_request("/modal")).await;
        assert_eq!(open.status(), StatusCode::OK);
        assert_eq!(open.headers()[header::CONTENT_TYPE], "text/html; charset=utf-8");
        let html = body_string(open).await;
        assert!(html.starts_with("<dialog open"));
        assert!(html.contains(r#"hx-get="/close_modal""#));

        let close = send(router(dir.path()), get_request("/close_modal")).await;
        assert_eq!(close.status(), StatusCode::OK);
        assert_eq!(body_string(close).await, "");
    }

    #[tokio::test]
    async fn test_static_asset_served() {
        let dir = static_dir();
        let response = send(router(dir.path()), get_request("/style/single-page.css")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
        assert_eq!(body_string(response).await, "main { gap: 1rem; }");
    }

    #[tokio::test]
    async fn test_static_asset_missing_is_json_not_found() {
        let dir = static_dir();
        let response = send(router(dir.path()), get_request("/style/missing.css")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"error": "Static asset not found", "path": "style/missing.css"})
        );
    }

    #[tokio::test]
    async fn test_static_path_traversal_rejected() {
        let dir = static_dir();
        let response = send(router(dir.path()), get_request("/style/%2E%2E/%2E%2E/secret.txt")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("Invalid asset path"));
    }

    #[tokio::test]
    async fn test_path_without_extension_not_found() {
        let dir = static_dir();
        let response = send(router(dir.path()), get_request("/style")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_static_asset_rejects_post() {
        let dir = static_dir();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/style/single-page.css")
            .body(Body::empty())
            .unwrap();
        let response = send(router(dir.path()), request).await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn test_router_usable_outside_tokio_macro() {
        let dir = static_dir();
        let response = tokio_test::block_on(send(router(dir.path()), get_request("/close_modal")));
        assert_eq!(response.status(), StatusCode::OK);
    }
}
