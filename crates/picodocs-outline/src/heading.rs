//! Heading builder.

use picodocs_markup::tags::{a, p};
use picodocs_markup::{Element, Node};

use crate::OutlineError;
use crate::level::HeadingLevel;

/// Text of the anchor link appended to every heading.
pub const ANCHOR_GLYPH: &str = "🔗";

/// Derive the anchor of a heading title.
///
/// The title is lowercased and every space becomes a hyphen. Nothing else is
/// touched, so different titles can share an anchor only if they differ in
/// case alone.
///
/// # Examples
///
/// ```
/// use picodocs_outline::anchor_for;
///
/// assert_eq!(anchor_for("Quick Start"), "quick-start");
/// assert_eq!(anchor_for("RTL"), "rtl");
/// ```
#[must_use]
pub fn anchor_for(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

/// A heading waiting to be turned into markup.
#[derive(Clone, Debug)]
pub struct Heading {
    level: HeadingLevel,
    title: String,
    description: Option<Node>,
    anchor: String,
}

impl Heading {
    /// Create a heading, validating the level.
    pub fn new(level: u8, title: impl Into<String>) -> Result<Self, OutlineError> {
        Ok(Self::with_level(HeadingLevel::new(level)?, title))
    }

    /// Create a heading at an already validated level.
    pub fn with_level(level: HeadingLevel, title: impl Into<String>) -> Self {
        let title = title.into();
        let anchor = anchor_for(&title);
        Self {
            level,
            title,
            description: None,
            anchor,
        }
    }

    /// Attach a description paragraph. Empty descriptions are dropped.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<Node>) -> Self {
        let description = description.into();
        self.description = (!description.is_empty()).then_some(description);
        self
    }

    /// Replace the derived anchor.
    #[must_use]
    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = anchor.into();
        self
    }

    /// Heading level.
    #[must_use]
    pub fn level(&self) -> HeadingLevel {
        self.level
    }

    /// Heading title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Anchor ID used for the link target.
    #[must_use]
    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    /// Convert into the heading element and optional description paragraph.
    pub fn into_nodes(self) -> (Element, Option<Element>) {
        let link = a()
            .attr("href", format!("#{}", self.anchor))
            .id(self.anchor)
            .class("secondary")
            .attr("tabindex", "-1")
            .child(ANCHOR_GLYPH);
        let heading = self.level.element().child(self.title).child(link);
        let description = self.description.map(|d| p().child(d));
        (heading, description)
    }
}

/// Build a heading element with its anchor link, plus an optional description paragraph.
///
/// # Examples
///
/// ```
/// use picodocs_outline::heading;
///
/// let (h, desc) = heading(3, "Quick Start", None).unwrap();
/// assert_eq!(h.tag(), "h3");
/// assert!(desc.is_none());
/// ```
pub fn heading(
    level: u8,
    title: &str,
    description: Option<Node>,
) -> Result<(Element, Option<Element>), OutlineError> {
    let mut spec = Heading::new(level, title)?;
    if let Some(description) = description {
        spec = spec.with_description(description);
    }
    Ok(spec.into_nodes())
}
