//! Static asset serving for picodocs.
//!
//! Provides a single API for accessing static files (page stylesheet, color
//! palette) in both embedded and filesystem modes:
//!
//! - [`Assets::from_dir`]: files are read from a directory at runtime
//! - [`Assets::embedded`] (`embed` feature): files are compiled into the
//!   binary from `static/` via `rust-embed`
//!
//! Asset paths are relative, `/`-separated and may not leave the root.

use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

/// Embedded static files (only available with `embed` feature).
#[cfg(feature = "embed")]
#[derive(rust_embed::RustEmbed)]
#[folder = "../../static"]
#[prefix = ""]
struct Embedded;

/// Asset lookup error.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// No asset at this path.
    #[error("Static asset not found: {0}")]
    StaticAssetNotFound(String),
    /// Path escapes the asset root.
    #[error("Invalid asset path: {0}")]
    PathTraversal(String),
    /// Asset exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone, Debug)]
enum Source {
    Dir(PathBuf),
    #[cfg(feature = "embed")]
    Embedded,
}

/// Static asset store.
#[derive(Clone, Debug)]
pub struct Assets {
    source: Source,
}

impl Assets {
    /// Serve assets from `dir`.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::Dir(dir.into()),
        }
    }

    /// Serve assets compiled into the binary.
    #[cfg(feature = "embed")]
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            source: Source::Embedded,
        }
    }

    /// Directory assets are read from, `None` when embedded.
    #[must_use]
    pub fn dir(&self) -> Option<&Path> {
        match &self.source {
            Source::Dir(dir) => Some(dir),
            #[cfg(feature = "embed")]
            Source::Embedded => None,
        }
    }

    /// Get an asset by path (relative to the asset root).
    pub fn get(&self, path: &str) -> Result<Cow<'static, [u8]>, AssetError> {
        check_path(path)?;
        match &self.source {
            Source::Dir(dir) => {
                let full_path = dir.join(path);
                if !full_path.is_file() {
                    return Err(AssetError::StaticAssetNotFound(path.to_owned()));
                }
                std::fs::read(&full_path)
                    .map(Cow::Owned)
                    .map_err(|source| AssetError::Io {
                        path: full_path,
                        source,
                    })
            }
            #[cfg(feature = "embed")]
            Source::Embedded => Embedded::get(path)
                .map(|f| f.data)
                .ok_or_else(|| AssetError::StaticAssetNotFound(path.to_owned())),
        }
    }
}

/// Reject paths that are empty, absolute or climb out of the root.
fn check_path(path: &str) -> Result<(), AssetError> {
    let normal = !path.is_empty()
        && !path.contains('\\')
        && Path::new(path)
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
    if normal {
        Ok(())
    } else {
        Err(AssetError::PathTraversal(path.to_owned()))
    }
}

/// Return the MIME type string for the given file path.
pub fn mime_for(path: &str) -> &'static str {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream")
}
