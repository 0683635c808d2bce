//! Markup node tree and HTML serializer.
//!
//! Pages are described as owned trees of [`Node`] values and serialized to
//! HTML5 with [`Node::render`].
//!
//! # Architecture
//!
//! ```text
//! tags::div() ──► Element ──► Node::Element ──┐
//! "text"      ──────────────► Node::Text    ──┼──► Node::render() ──► String
//! (a, b, c)   ──────────────► Node::Fragment ─┘
//! ```
//!
//! Construction never fails. Structural problems (empty tag names, malformed
//! attribute names) are reported by the serializer as [`MarkupError`], so a
//! page built once at startup fails fast before any request is served.
//!
//! # Example
//!
//! ```
//! use picodocs_markup::tags::{a, p};
//!
//! let node = p()
//!     .child("See ")
//!     .child(a().attr("href", "#grid").child("Grid"))
//!     .child(".");
//!
//! assert_eq!(
//!     node.render().unwrap(),
//!     r##"<p>See <a href="#grid">Grid</a>.</p>"##
//! );
//! ```

mod node;
mod render;
pub mod tags;

pub use node::{Element, Node, fragment, text};
pub use render::{MarkupError, escape_html};
