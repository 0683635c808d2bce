//! Section builder and declarative section tree.

use picodocs_markup::tags;
use picodocs_markup::{Element, Node};

use crate::OutlineError;
use crate::heading::Heading;

/// Build a `<section>` holding a heading, its optional description, then `children` in order.
///
/// Levels are taken as given: nothing checks that nested sections use deeper
/// levels than their parent. Use [`Section`] with a
/// [`PageBuilder`](crate::PageBuilder) to have levels derived from nesting.
pub fn section<I, N>(
    level: u8,
    title: &str,
    description: Option<Node>,
    children: I,
) -> Result<Element, OutlineError>
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    let mut spec = Heading::new(level, title)?;
    if let Some(description) = description {
        spec = spec.with_description(description);
    }
    Ok(section_element(spec, children))
}

/// Wrap a heading and children into a `<section>` element.
pub(crate) fn section_element<I, N>(spec: Heading, children: I) -> Element
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    let (heading, description) = spec.into_nodes();
    tags::section()
        .child(heading)
        .child(description)
        .children(children)
}

/// One item of a section body.
#[derive(Clone, Debug)]
pub enum SectionItem {
    /// Leaf content rendered as-is.
    Content(Node),
    /// Nested section, one heading level deeper.
    Section(Section),
}

/// A titled, nestable block of the page outline.
///
/// Heading levels and anchors are not stored here; they are assigned when a
/// [`PageBuilder`](crate::PageBuilder) places the section in the page.
#[derive(Clone, Debug)]
pub struct Section {
    title: String,
    description: Option<Node>,
    items: Vec<SectionItem>,
}

impl Section {
    /// Create an empty section.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            items: Vec::new(),
        }
    }

    /// Set the description shown under the heading.
    #[must_use]
    pub fn description(mut self, description: impl Into<Node>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append leaf content.
    #[must_use]
    pub fn content(mut self, content: impl Into<Node>) -> Self {
        self.items.push(SectionItem::Content(content.into()));
        self
    }

    /// Append a nested section.
    #[must_use]
    pub fn subsection(mut self, section: Section) -> Self {
        self.items.push(SectionItem::Section(section));
        self
    }

    /// Append several nested sections.
    #[must_use]
    pub fn subsections(mut self, sections: impl IntoIterator<Item = Section>) -> Self {
        self.items
            .extend(sections.into_iter().map(SectionItem::Section));
        self
    }

    /// Section title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body items in order.
    #[must_use]
    pub fn items(&self) -> &[SectionItem] {
        &self.items
    }

    /// Directly nested sections.
    pub fn children(&self) -> impl Iterator<Item = &Section> {
        self.items.iter().filter_map(|item| match item {
            SectionItem::Section(s) => Some(s),
            SectionItem::Content(_) => None,
        })
    }

    /// Number of sections in this subtree, including `self`.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children().map(Section::count).sum::<usize>()
    }

    /// Depth of the deepest nesting below this section (0 for a leaf section).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.children()
            .map(|s| s.depth() + 1)
            .max()
            .unwrap_or_default()
    }

    pub(crate) fn into_parts(self) -> (String, Option<Node>, Vec<SectionItem>) {
        (self.title, self.description, self.items)
    }
}
