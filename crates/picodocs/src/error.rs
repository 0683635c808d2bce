//! CLI error types.

use picodocs_config::ConfigError;
use picodocs_server::ServerError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Server(#[from] ServerError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
