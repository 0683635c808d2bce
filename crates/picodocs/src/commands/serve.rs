//! `picodocs serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use picodocs_config::{CliSettings, Config};
use picodocs_server::{run_server, server_config_from_config};

use super::TocArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover picodocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long, env = "PICODOCS_HOST")]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long, env = "PICODOCS_PORT")]
    port: Option<u16>,

    /// Static files directory (overrides config).
    #[arg(long)]
    static_dir: Option<PathBuf>,

    #[command(flatten)]
    toc: TocArgs,

    /// Enable verbose output (request and startup logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            static_dir: self.static_dir,
            toc: self.toc.resolve(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let server_config = server_config_from_config(&config, version.to_owned());
        output.startup(&server_config);
        run_server(server_config).await?;

        Ok(())
    }
}
