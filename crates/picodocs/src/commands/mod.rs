//! CLI command implementations.

pub(crate) mod outline;
pub(crate) mod render;
pub(crate) mod serve;

use clap::Args;

pub(crate) use outline::OutlineArgs;
pub(crate) use render::RenderArgs;
pub(crate) use serve::ServeArgs;

/// `--toc` / `--no-toc` flags.
#[derive(Args)]
pub(crate) struct TocArgs {
    /// Show the table of contents (overrides config).
    #[arg(long)]
    toc: bool,

    /// Hide the table of contents (overrides config).
    #[arg(long, conflicts_with = "toc")]
    no_toc: bool,
}

impl TocArgs {
    /// Resolve the override, `None` when neither flag is given.
    pub(crate) fn resolve(&self) -> Option<bool> {
        self.no_toc.then_some(false).or(self.toc.then_some(true))
    }
}
