//! `picodocs outline` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use picodocs_config::Config;
use picodocs_outline::TocNode;
use picodocs_server::{build_page, server_config_from_config};

use crate::error::CliError;

/// Arguments for the outline command.
#[derive(Args)]
pub(crate) struct OutlineArgs {
    /// Path to configuration file (default: auto-discover picodocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the outline as JSON.
    #[arg(long)]
    json: bool,
}

impl OutlineArgs {
    pub(crate) fn execute(self, version: &str) -> Result<(), CliError> {
        let config = Config::load(self.config.as_deref(), None)?;
        let page = build_page(&server_config_from_config(&config, version.to_owned()))?;

        let text = if self.json {
            serde_json::to_string_pretty(page.outline())?
        } else {
            format_outline(page.outline())
        };

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}")?;
        Ok(())
    }
}

/// One line per heading, indented by nesting depth, followed by its anchor.
fn format_outline(nodes: &[TocNode]) -> String {
    let mut lines = Vec::new();
    for node in nodes {
        push_lines(node, 0, &mut lines);
    }
    lines.join("\n")
}

fn push_lines(node: &TocNode, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    lines.push(format!("{indent}{}  #{}", node.entry.title, node.entry.id));
    for child in &node.children {
        push_lines(child, depth + 1, lines);
    }
}
