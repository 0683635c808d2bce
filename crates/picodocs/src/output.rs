//! Colored terminal output utilities.

use console::{Style, Term};
use picodocs_server::ServerConfig;

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    green: Style,
    red: Style,
    cyan_bold: Style,
    dim: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print the `serve` banner: URL highlighted, settings dimmed.
    pub(crate) fn startup(&self, config: &ServerConfig) {
        let url = format!("Serving on http://{}:{}", config.host, config.port);
        let _ = self.term.write_line(&self.cyan_bold.apply_to(url).to_string());
        for (label, value) in startup_settings(config) {
            let line = format!("  {label:<18} {value}");
            let _ = self.term.write_line(&self.dim.apply_to(line).to_string());
        }
    }
}

/// Label and value of each setting shown at startup.
fn startup_settings(config: &ServerConfig) -> Vec<(&'static str, String)> {
    let content = &config.content;
    vec![
        ("Title", content.title.clone()),
        ("Pico CSS", content.pico_css.clone()),
        (
            "Static files",
            config
                .assets
                .dir()
                .map_or_else(|| "embedded".to_owned(), |dir| dir.display().to_string()),
        ),
        (
            "Color palette",
            config
                .palette_path
                .clone()
                .unwrap_or_else(|| "none".to_owned()),
        ),
        (
            "Table of contents",
            content
                .toc_depth
                .map_or_else(|| "disabled".to_owned(), |depth| format!("depth {depth}")),
        ),
        ("Anchors", format!("{:?}", content.anchors).to_lowercase()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_startup_settings_defaults() {
        let settings = startup_settings(&ServerConfig::default());
        let values: Vec<_> = settings.iter().map(|(_, value)| value.as_str()).collect();
        assert_eq!(
            values,
            vec![
                picodocs_content::DEFAULT_TITLE,
                picodocs_content::DEFAULT_PICO_CSS,
                "static",
                "none",
                "disabled",
                "scoped",
            ]
        );
    }

    #[test]
    fn test_startup_settings_show_palette_and_toc() {
        let mut config = ServerConfig {
            palette_path: Some("style/pico-color-palette.json".to_owned()),
            ..ServerConfig::default()
        };
        config.content.toc_depth = Some(3);
        let settings = startup_settings(&config);

        assert!(settings.contains(&("Color palette", "style/pico-color-palette.json".to_owned())));
        assert!(settings.contains(&("Table of contents", "depth 3".to_owned())));
    }
}
