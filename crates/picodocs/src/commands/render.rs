//! `picodocs render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use picodocs_config::{CliSettings, Config};
use picodocs_server::{render_page, server_config_from_config};

use super::TocArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Path to configuration file (default: auto-discover picodocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    toc: TocArgs,
}

impl RenderArgs {
    pub(crate) fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            toc: self.toc.resolve(),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let html = render_page(&server_config_from_config(&config, version.to_owned()))?;
        tracing::debug!(bytes = html.len(), "Rendered page");

        match &self.output {
            Some(path) => {
                std::fs::write(path, &html)?;
                output.success(&format!("Page written to {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(html.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }
        Ok(())
    }
}
