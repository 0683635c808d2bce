//! Heading, section and page composition.
//!
//! This crate turns titled, nestable content blocks into the markup outline
//! of a single documentation page:
//!
//! - [`heading`] builds an `h1`–`h6` element with a slug anchor link and an
//!   optional description paragraph.
//! - [`section`] wraps a heading and its children in a `<section>`.
//! - [`page`] wraps top-level sections in the page chrome.
//! - [`PageBuilder`] assembles a declarative [`Section`] tree, deriving
//!   heading levels from nesting depth and resolving unique anchors.
//!
//! # Example
//!
//! ```
//! use picodocs_outline::{PageBuilder, Section};
//!
//! let page = PageBuilder::new("Docs")
//!     .section(
//!         Section::new("Getting started")
//!             .subsection(Section::new("Quick start").description("Link Pico CSS.")),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let html = page.main().render().unwrap();
//! assert!(html.contains(r##"<h3>Quick start<a href="#quick-start""##));
//! ```

mod anchor;
mod heading;
mod level;
mod page;
mod section;
mod toc;

pub use anchor::AnchorStrategy;
pub use heading::{ANCHOR_GLYPH, Heading, anchor_for, heading};
pub use level::HeadingLevel;
pub use page::{Page, PageBuilder, page};
pub use section::{Section, SectionItem, section};
pub use toc::{TocEntry, TocNode, toc_aside};

/// Outline construction error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OutlineError {
    /// Heading level outside `1..=6`, either requested directly or reached by nesting.
    #[error("Invalid heading level {0}: expected 1-6")]
    InvalidHeadingLevel(u8),
}
