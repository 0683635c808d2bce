//! Configuration management for picodocs.
//!
//! Parses `picodocs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `page.pico_css`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override static files directory.
    pub static_dir: Option<PathBuf>,
    /// Override table-of-contents flag.
    pub toc: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "picodocs.toml";

/// Deepest heading level the table of contents can list.
const MAX_TOC_DEPTH: u8 = 6;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Page configuration.
    pub page: PageConfig,
    /// Static files configuration (paths are relative strings from TOML).
    #[serde(rename = "static")]
    static_files: StaticConfigRaw,
    /// Content configuration.
    pub content: ContentConfig,

    /// Resolved static files configuration (set after loading).
    #[serde(skip)]
    pub static_resolved: StaticConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 5001,
        }
    }
}

/// Page configuration.
///
/// Unset values fall back to the built-in page defaults.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Page title.
    pub title: Option<String>,
    /// Document language.
    pub lang: Option<String>,
    /// Pico CSS stylesheet URL.
    pub pico_css: Option<String>,
    /// Additional stylesheets, replacing the default page stylesheet.
    pub stylesheets: Option<Vec<String>>,
    /// Additional scripts.
    pub scripts: Vec<String>,
    /// Whether to render the table-of-contents aside.
    pub toc: bool,
    /// Heading levels listed in the table of contents.
    pub toc_depth: u8,
    /// How repeated heading anchors are disambiguated.
    pub anchors: AnchorsSetting,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: None,
            lang: None,
            pico_css: None,
            stylesheets: None,
            scripts: Vec::new(),
            toc: false,
            toc_depth: 2,
            anchors: AnchorsSetting::default(),
        }
    }
}

/// Anchor strategy as written in the config file.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnchorsSetting {
    /// Anchor is the slugged title, duplicates allowed.
    Title,
    /// Repeated anchors are qualified by their parent, then numbered.
    #[default]
    Scoped,
}

/// Raw static files configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct StaticConfigRaw {
    dir: Option<String>,
}

/// Resolved static files configuration with absolute paths.
#[derive(Debug, Default)]
pub struct StaticConfig {
    /// Directory served for `/{path}.{ext}` requests.
    pub dir: PathBuf,
}

/// Content configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ContentConfig {
    /// Color palette JSON, as an asset path inside the static directory.
    /// Enables the color picker demo.
    pub palette: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`server.host`").
        field: String,
        /// Error message (e.g., "${`PICODOCS_HOST`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `picodocs.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(static_dir) = &settings.static_dir {
            self.static_resolved.dir.clone_from(static_dir);
        }
        if let Some(toc) = settings.toc {
            self.page.toc = toc;
        }
    }

    /// Table-of-contents depth, or `None` when the aside is disabled.
    #[must_use]
    pub fn toc_depth(&self) -> Option<usize> {
        self.page.toc.then_some(usize::from(self.page.toc_depth))
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            page: PageConfig::default(),
            static_files: StaticConfigRaw::default(),
            content: ContentConfig::default(),
            static_resolved: StaticConfig {
                dir: base.join("static"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before validation
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_page()?;
        Ok(())
    }

    /// Validate server configuration.
    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 asks the OS for a random port, never what a config file means
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Validate page configuration.
    fn validate_page(&self) -> Result<(), ConfigError> {
        if let Some(ref pico_css) = self.page.pico_css {
            require_non_empty(pico_css, "page.pico_css")?;
            require_http_url(pico_css, "page.pico_css")?;
        }

        let depth = self.page.toc_depth;
        if depth == 0 || depth > MAX_TOC_DEPTH {
            return Err(ConfigError::Validation(format!(
                "page.toc_depth must be between 1 and {MAX_TOC_DEPTH}"
            )));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        if let Some(ref pico_css) = self.page.pico_css {
            self.page.pico_css = Some(expand::expand_env(pico_css, "page.pico_css")?);
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.static_resolved = StaticConfig {
            dir: config_dir.join(self.static_files.dir.as_deref().unwrap_or("static")),
        };
    }
}
