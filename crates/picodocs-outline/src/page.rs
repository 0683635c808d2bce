//! Page assembly.

use picodocs_markup::tags::{body, div, head, html, main, title};
use picodocs_markup::{Element, MarkupError, Node};

use crate::OutlineError;
use crate::anchor::{AnchorResolver, AnchorStrategy};
use crate::heading::Heading;
use crate::level::HeadingLevel;
use crate::section::{Section, SectionItem, section_element};
use crate::toc::{TocEntry, TocNode, toc_aside};

/// Default heading level of top-level sections (the page title is the `h1`).
const DEFAULT_BASE_LEVEL: u8 = 2;

/// Default document language.
const DEFAULT_LANG: &str = "en";

/// An assembled page, ready to render.
#[derive(Clone, Debug)]
pub struct Page {
    title: Element,
    html: Element,
    head: Vec<Node>,
    main: Element,
    outline: Vec<TocNode>,
}

impl Page {
    /// The `<title>` element.
    #[must_use]
    pub fn title(&self) -> &Element {
        &self.title
    }

    /// The `<html>` root element (attributes only; head and body are added on render).
    #[must_use]
    pub fn html_root(&self) -> &Element {
        &self.html
    }

    /// Extra `<head>` nodes (metadata, stylesheets, scripts).
    #[must_use]
    pub fn head(&self) -> &[Node] {
        &self.head
    }

    /// The `<main class="container">` landmark.
    #[must_use]
    pub fn main(&self) -> &Element {
        &self.main
    }

    /// Heading tree of the page. Empty for pages assembled with [`page`].
    #[must_use]
    pub fn outline(&self) -> &[TocNode] {
        &self.outline
    }

    /// Flat table of contents in document order.
    #[must_use]
    pub fn toc(&self) -> Vec<TocEntry> {
        let mut out = Vec::new();
        for node in &self.outline {
            node.flatten_into(&mut out);
        }
        out
    }

    /// Render the complete HTML document.
    pub fn render(&self) -> Result<String, MarkupError> {
        let document = self
            .html
            .clone()
            .child(
                head()
                    .child(self.title.clone())
                    .children(self.head.iter().cloned()),
            )
            .child(body().child(self.main.clone()));

        let mut out = String::from("<!doctype html>");
        document.render_into(&mut out)?;
        Ok(out)
    }
}

/// Assemble top-level sections into a page.
///
/// The sections go into `<div id="content" role="document">`, preceded by
/// `aside` when given, all inside `<main class="container">`.
pub fn page<I, N>(page_title: &str, head_nodes: Vec<Node>, sections: I, aside: Option<Element>) -> Page
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    let content = div()
        .id("content")
        .attr("role", "document")
        .children(sections);
    Page {
        title: title().child(page_title),
        html: html().attr("lang", DEFAULT_LANG),
        head: head_nodes,
        main: main().class("container").child(aside).child(content),
        outline: Vec::new(),
    }
}

/// Builds a [`Page`] from a declarative [`Section`] tree.
///
/// Top-level sections get the base level (2 by default) and every nesting
/// step adds one; nesting past `h6` fails with
/// [`OutlineError::InvalidHeadingLevel`].
#[derive(Clone, Debug)]
pub struct PageBuilder {
    title: String,
    lang: String,
    head: Vec<Node>,
    sections: Vec<Section>,
    base_level: u8,
    anchors: AnchorStrategy,
    toc_depth: Option<usize>,
}

impl PageBuilder {
    /// Create a builder for a page with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lang: DEFAULT_LANG.to_owned(),
            head: Vec::new(),
            sections: Vec::new(),
            base_level: DEFAULT_BASE_LEVEL,
            anchors: AnchorStrategy::default(),
            toc_depth: None,
        }
    }

    /// Set the document language.
    #[must_use]
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Append a `<head>` node.
    #[must_use]
    pub fn head(mut self, node: impl Into<Node>) -> Self {
        self.head.push(node.into());
        self
    }

    /// Set the heading level of top-level sections.
    #[must_use]
    pub fn base_level(mut self, level: u8) -> Self {
        self.base_level = level;
        self
    }

    /// Set the anchor strategy.
    #[must_use]
    pub fn anchors(mut self, strategy: AnchorStrategy) -> Self {
        self.anchors = strategy;
        self
    }

    /// Add a table-of-contents aside listing `depth` outline levels.
    #[must_use]
    pub fn table_of_contents(mut self, depth: usize) -> Self {
        self.toc_depth = Some(depth);
        self
    }

    /// Append a top-level section.
    #[must_use]
    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Append several top-level sections.
    #[must_use]
    pub fn sections(mut self, sections: impl IntoIterator<Item = Section>) -> Self {
        self.sections.extend(sections);
        self
    }

    /// Assemble the page.
    pub fn build(self) -> Result<Page, OutlineError> {
        let level = HeadingLevel::new(self.base_level)?;
        let mut resolver = AnchorResolver::new(self.anchors, &self.sections);

        let mut elements = Vec::with_capacity(self.sections.len());
        let mut outline = Vec::with_capacity(self.sections.len());
        for section in self.sections {
            let (element, node) = build_section(section, level, None, &mut resolver)?;
            elements.push(element);
            outline.push(node);
        }

        let aside = self.toc_depth.map(|depth| toc_aside(&outline, depth));
        let mut page = page(&self.title, self.head, elements, aside);
        page.html.set_attr("lang", self.lang);
        page.outline = outline;
        Ok(page)
    }
}

fn build_section(
    section: Section,
    level: HeadingLevel,
    parent: Option<&str>,
    resolver: &mut AnchorResolver,
) -> Result<(Element, TocNode), OutlineError> {
    let (title, description, items) = section.into_parts();
    let anchor = resolver.resolve(&title, parent);

    let mut toc = TocNode::new(TocEntry {
        level: level.get(),
        title: title.clone(),
        id: anchor.clone(),
    });

    let mut spec = Heading::with_level(level, title).with_anchor(anchor.as_str());
    if let Some(description) = description {
        spec = spec.with_description(description);
    }

    let mut children: Vec<Node> = Vec::with_capacity(items.len());
    for item in items {
        match item {
            SectionItem::Content(node) => children.push(node),
            SectionItem::Section(sub) => {
                let (element, node) = build_section(sub, level.deeper()?, Some(&anchor), resolver)?;
                children.push(element.into());
                toc.children.push(node);
            }
        }
    }

    Ok((section_element(spec, children), toc))
}
