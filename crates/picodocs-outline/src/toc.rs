//! Table of contents.

use picodocs_markup::Element;
use picodocs_markup::tags::{a, aside, li, nav, ul};

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TocEntry {
    /// Heading level (1-6).
    pub level: u8,
    /// Heading text.
    pub title: String,
    /// Anchor ID for linking.
    pub id: String,
}

/// Table of contents entry with the entries nested below it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TocNode {
    /// The heading itself.
    pub entry: TocEntry,
    /// Headings of directly nested sections.
    pub children: Vec<TocNode>,
}

impl TocNode {
    pub(crate) fn new(entry: TocEntry) -> Self {
        Self {
            entry,
            children: Vec::new(),
        }
    }

    /// Append this node and its descendants to `out` in document order.
    pub fn flatten_into(&self, out: &mut Vec<TocEntry>) {
        out.push(self.entry.clone());
        for child in &self.children {
            child.flatten_into(out);
        }
    }
}

/// Build the `<aside>` navigation block for an outline.
///
/// `depth` is the number of outline levels listed: 1 keeps only the
/// top-level sections.
#[must_use]
pub fn toc_aside(nodes: &[TocNode], depth: usize) -> Element {
    aside().child(
        nav()
            .attr("aria-label", "Table of contents")
            .child(toc_list(nodes, depth)),
    )
}

fn toc_list(nodes: &[TocNode], depth: usize) -> Element {
    ul().children(nodes.iter().map(|node| {
        let item = li().child(
            a().attr("href", format!("#{}", node.entry.id))
                .child(node.entry.title.as_str()),
        );
        if depth > 1 && !node.children.is_empty() {
            item.child(toc_list(&node.children, depth - 1))
        } else {
            item
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(level: u8, title: &str, id: &str) -> TocEntry {
        TocEntry {
            level,
            title: title.to_owned(),
            id: id.to_owned(),
        }
    }

    fn sample() -> Vec<TocNode> {
        vec![TocNode {
            entry: entry(2, "Layout", "layout"),
            children: vec![TocNode::new(entry(3, "Grid", "grid"))],
        }]
    }

    #[test]
    fn test_flatten_document_order() {
        let mut out = Vec::new();
        for node in sample() {
            node.flatten_into(&mut out);
        }
        assert_eq!(
            out,
            vec![entry(2, "Layout", "layout"), entry(3, "Grid", "grid")]
        );
    }

    #[test]
    fn test_toc_aside_depth_one() {
        let html = toc_aside(&sample(), 1).render().unwrap();
        assert_eq!(
            html,
            r##"<aside><nav aria-label="Table of contents"><ul><li><a href="#layout">Layout</a></li></ul></nav></aside>"##
        );
    }

    #[test]
    fn test_toc_aside_nested() {
        let html = toc_aside(&sample(), 2).render().unwrap();
        assert!(html.contains(
            r##"<li><a href="#layout">Layout</a><ul><li><a href="#grid">Grid</a></li></ul></li>"##
        ));
    }
}
