//! picodocs CLI - single-page Pico CSS documentation.
//!
//! Provides commands for:
//! - `serve`: Start the documentation server
//! - `render`: Write the page HTML to a file or stdout
//! - `outline`: Print the heading tree with anchors

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{OutlineArgs, RenderArgs, ServeArgs};
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// picodocs - Pico CSS documentation on a single page.
#[derive(Parser)]
#[command(name = "picodocs", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the documentation server.
    Serve(ServeArgs),
    /// Render the page to HTML.
    Render(RenderArgs),
    /// Print the page outline.
    Outline(OutlineArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(args.execute(VERSION))
        }
        Commands::Render(args) => args.execute(VERSION),
        Commands::Outline(args) => args.execute(VERSION),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// Log directives enabled by `serve --verbose`.
const VERBOSE_DIRECTIVES: &str = "warn,picodocs=info,picodocs_server=info,picodocs_content=info,tower_http=debug";

/// `--verbose` logs startup and every request, otherwise `RUST_LOG` or warnings only.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_DIRECTIVES)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}
