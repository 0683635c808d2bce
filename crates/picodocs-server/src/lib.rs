//! HTTP server for picodocs.
//!
//! Serves the single documentation page and the htmx fragments it requests:
//! - `GET /`: the page, rendered once at startup, with `ETag` revalidation
//! - `POST /toggle_theme`: the theme switcher fragment
//! - `GET /modal` and `GET /close_modal`: the modal dialog demo
//! - `GET /{path}.{ext}`: static assets
//!
//! # Static Asset Modes
//!
//! - **Directory** (default): files are read from the configured static dir
//! - **Embedded** (`embed` feature): files compiled into the binary are used
//!   when the static dir does not exist
//!
//! # Quick Start
//!
//! ```ignore
//! use picodocs_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         port: 8080,
//!         version: "1.0.0".to_owned(),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::sync::Arc;

use chrono::Utc;
use picodocs_assets::Assets;
use picodocs_config::{AnchorsSetting, Config};
use picodocs_content::{ContentOptions, Palette};
use picodocs_outline::{AnchorStrategy, Page};
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Static asset store.
    pub assets: Assets,
    /// Page content options. `palette` is filled from `palette_path`.
    pub content: ContentOptions,
    /// Color palette asset path (`None` omits the color picker).
    pub palette_path: Option<String>,
    /// Application version (for ETag computation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 5001,
            assets: Assets::from_dir("static"),
            content: ContentOptions::default(),
            palette_path: None,
            version: String::new(),
        }
    }
}

/// Build the documentation page for `config`.
///
/// Loads the color palette from the asset store when one is configured.
///
/// # Errors
///
/// Returns an error if the palette is missing or malformed, or the page
/// cannot be assembled.
pub fn build_page(config: &ServerConfig) -> Result<Page, ServerError> {
    let mut options = config.content.clone();
    if let Some(path) = &config.palette_path {
        let bytes = config.assets.get(path)?;
        options.palette = Some(Palette::from_json(&bytes)?);
    }
    Ok(picodocs_content::build_page(&options)?)
}

/// Build and render the documentation page.
///
/// # Errors
///
/// Returns an error if the page cannot be built or serialized.
pub fn render_page(config: &ServerConfig) -> Result<String, ServerError> {
    Ok(build_page(config)?.render()?)
}

/// Render the page and prepare the shared state.
fn load_state(config: &ServerConfig) -> Result<AppState, ServerError> {
    let html = render_page(config)?;
    let csp = middleware::security::content_security_policy(&config.content)?;
    Ok(AppState::new(
        html,
        Utc::now(),
        config.assets.clone(),
        csp,
        &config.version,
    ))
}

/// Run the server.
///
/// The page is built and rendered once before binding.
///
/// # Errors
///
/// Returns an error if the page cannot be built or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let state = Arc::new(load_state(&config)?);
    tracing::info!(bytes = state.html.len(), etag = %state.etag, "Rendered page");

    let app = app::create_router(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(address = %listener.local_addr()?, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create content options from picodocs config.
///
/// Unset page fields keep the [`ContentOptions`] defaults.
#[must_use]
pub fn content_options_from_config(config: &Config) -> ContentOptions {
    let defaults = ContentOptions::default();
    let page = &config.page;
    ContentOptions {
        title: page.title.clone().unwrap_or(defaults.title),
        lang: page.lang.clone().unwrap_or(defaults.lang),
        pico_css: page.pico_css.clone().unwrap_or(defaults.pico_css),
        stylesheets: page.stylesheets.clone().unwrap_or(defaults.stylesheets),
        scripts: page.scripts.clone(),
        toc_depth: config.toc_depth(),
        anchors: match page.anchors {
            AnchorsSetting::Title => AnchorStrategy::Title,
            AnchorsSetting::Scoped => AnchorStrategy::Scoped,
        },
        palette: None,
    }
}

/// Create server configuration from picodocs config.
///
/// With the `embed` feature, assets compiled into the binary are used when the
/// configured static directory does not exist.
#[must_use]
pub fn server_config_from_config(config: &Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        assets: assets_for(config),
        content: content_options_from_config(config),
        palette_path: config.content.palette.clone(),
        version,
    }
}

fn assets_for(config: &Config) -> Assets {
    let dir = &config.static_resolved.dir;
    #[cfg(feature = "embed")]
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "Static dir missing, using embedded assets");
        return Assets::embedded();
    }
    Assets::from_dir(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use picodocs_config::CliSettings;
    use pretty_assertions::assert_eq;

    fn palette_json() -> String {
        let colors: serde_json::Map<String, serde_json::Value> = picodocs_content::palette::COLORS
            .iter()
            .zip(picodocs_content::palette::SHADES)
            .map(|(color, shade)| {
                let mut shades = serde_json::Map::new();
                shades.insert(shade.to_owned(), "#000000".into());
                ((*color).to_owned(), serde_json::Value::Object(shades))
            })
            .collect();
        serde_json::Value::Object(colors).to_string()
    }

    fn config_in(dir: &std::path::Path, toml: &str) -> Config {
        let path = dir.join("picodocs.toml");
        std::fs::write(&path, toml).unwrap();
        Config::load(Some(&path), None).unwrap()
    }

    #[test]
    fn test_content_options_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "");
        let options = content_options_from_config(&config);
        let defaults = ContentOptions::default();

        assert_eq!(options.title, defaults.title);
        assert_eq!(options.pico_css, defaults.pico_css);
        assert_eq!(options.stylesheets, defaults.stylesheets);
        assert_eq!(options.anchors, AnchorStrategy::Scoped);
        assert_eq!(options.toc_depth, None);
    }

    #[test]
    fn test_content_options_from_page_section() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(
            dir.path(),
            r#"
[page]
title = "Docs"
lang = "fr"
stylesheets = []
scripts = ["extra.js"]
toc = true
toc_depth = 3
anchors = "title"
"#,
        );
        let options = content_options_from_config(&config);

        assert_eq!(options.title, "Docs");
        assert_eq!(options.lang, "fr");
        assert!(options.stylesheets.is_empty());
        assert_eq!(options.scripts, vec!["extra.js".to_owned()]);
        assert_eq!(options.toc_depth, Some(3));
        assert_eq!(options.anchors, AnchorStrategy::Title);
    }

    #[test]
    fn test_server_config_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("picodocs.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9000\n[static]\ndir = \"public\"\n[content]\npalette = \"colors.json\"\n",
        )
        .unwrap();
        let cli = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            ..CliSettings::default()
        };
        let config = Config::load(Some(&path), Some(&cli)).unwrap();
        let server = server_config_from_config(&config, "1.2.3".to_owned());

        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 9000);
        assert_eq!(server.version, "1.2.3");
        assert_eq!(server.palette_path.as_deref(), Some("colors.json"));
        assert_eq!(server.assets.dir(), Some(dir.path().join("public").as_path()));
    }

    #[test]
    fn test_build_page_with_palette() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("colors.json"), palette_json()).unwrap();
        let config = ServerConfig {
            assets: Assets::from_dir(dir.path()),
            palette_path: Some("colors.json".to_owned()),
            ..ServerConfig::default()
        };

        let html = build_page(&config).unwrap().render().unwrap();
        assert!(html.contains("color-picker"));
    }

    #[test]
    fn test_build_page_missing_palette_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            assets: Assets::from_dir(dir.path()),
            palette_path: Some("colors.json".to_owned()),
            ..ServerConfig::default()
        };

        let err = build_page(&config).unwrap_err();
        assert_eq!(err.to_string(), "Static asset not found: colors.json");
    }

    #[test]
    fn test_build_page_malformed_palette_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("colors.json"), "[1, 2").unwrap();
        let config = ServerConfig {
            assets: Assets::from_dir(dir.path()),
            palette_path: Some("colors.json".to_owned()),
            ..ServerConfig::default()
        };

        assert!(matches!(
            build_page(&config),
            Err(ServerError::Content(_))
        ));
    }

    #[test]
    fn test_load_state_allows_configured_script_origin() {
        let state = load_state(&ServerConfig {
            content: ContentOptions {
                scripts: vec!["https://unpkg.com/alpinejs".to_owned()],
                ..ContentOptions::default()
            },
            ..ServerConfig::default()
        })
        .unwrap();

        assert!(state.html.contains(r#"<script src="https://unpkg.com/alpinejs"></script>"#));
        assert!(state.csp.to_str().unwrap().contains("https://unpkg.com;"));
    }

    #[test]
    fn test_load_state_computes_etag() {
        let state = load_state(&ServerConfig {
            version: "1.0.0".to_owned(),
            ..ServerConfig::default()
        })
        .unwrap();

        assert!(state.html.starts_with("<!doctype html>"));
        assert_eq!(state.etag.len(), 18);
        assert!(state.last_modified.ends_with(" GMT"));
    }
}
