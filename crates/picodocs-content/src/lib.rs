//! Pico CSS documentation content.
//!
//! Builds the single documentation page: seven chapters of headings, code
//! samples and live component demos, plus the fragments served to htmx
//! requests (theme switcher, modal dialog).
//!
//! ```
//! use picodocs_content::{ContentOptions, build_page};
//!
//! let page = build_page(&ContentOptions::default()).unwrap();
//! assert_eq!(page.outline().len(), 7);
//! ```

mod blocks;
mod chapters;
mod head;
pub mod modal;
pub mod palette;
pub mod theme;

use picodocs_outline::{AnchorStrategy, OutlineError, Page, PageBuilder};

pub use chapters::CHAPTER_TITLES;
pub use head::{script_urls, stylesheet_urls};
pub use palette::Palette;

/// Default page title.
pub const DEFAULT_TITLE: &str = "picodocs 🧡 Pico CSS";

/// Default Pico CSS stylesheet.
pub const DEFAULT_PICO_CSS: &str =
    "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.pumpkin.min.css";

/// Default page stylesheet, served from the static directory.
pub const DEFAULT_PAGE_CSS: &str = "style/single-page.css";

/// Content building error.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Outline could not be assembled.
    #[error(transparent)]
    Outline(#[from] OutlineError),
    /// Palette file is not valid JSON of the expected shape.
    #[error("Invalid color palette: {0}")]
    Palette(#[source] serde_json::Error),
    /// Palette lacks a color used by the picker.
    #[error("Color palette has no shade {shade} for {color}")]
    MissingShade {
        /// Color name.
        color: String,
        /// Shade name.
        shade: String,
    },
}

/// Options for building the page.
#[derive(Clone, Debug)]
pub struct ContentOptions {
    /// Page title.
    pub title: String,
    /// Document language.
    pub lang: String,
    /// Pico CSS stylesheet URL.
    pub pico_css: String,
    /// Additional stylesheet URLs.
    pub stylesheets: Vec<String>,
    /// Additional script URLs, loaded after htmx and highlight.js.
    pub scripts: Vec<String>,
    /// Table-of-contents depth (`None` disables the aside).
    pub toc_depth: Option<usize>,
    /// Anchor strategy.
    pub anchors: AnchorStrategy,
    /// Palette for the color picker demo (`None` omits the demo).
    pub palette: Option<Palette>,
}

impl Default for ContentOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            lang: "en".to_owned(),
            pico_css: DEFAULT_PICO_CSS.to_owned(),
            stylesheets: vec![DEFAULT_PAGE_CSS.to_owned()],
            scripts: Vec::new(),
            toc_depth: None,
            anchors: AnchorStrategy::default(),
            palette: None,
        }
    }
}

/// Build the documentation page.
pub fn build_page(options: &ContentOptions) -> Result<Page, ContentError> {
    let mut builder = PageBuilder::new(options.title.as_str())
        .lang(options.lang.as_str())
        .anchors(options.anchors)
        .sections(chapters::all(options)?);

    for node in head::head_nodes(options) {
        builder = builder.head(node);
    }
    if let Some(depth) = options.toc_depth {
        builder = builder.table_of_contents(depth);
    }

    let page = builder.build()?;
    tracing::debug!(
        headings = page.toc().len(),
        chapters = page.outline().len(),
        "Built documentation page"
    );
    Ok(page)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use pretty_assertions::assert_eq;

    fn default_page() -> Page {
        build_page(&ContentOptions::default()).unwrap()
    }

    #[test]
    fn test_seven_chapters_in_order() {
        let page = default_page();
        let titles: Vec<_> = page
            .outline()
            .iter()
            .map(|node| node.entry.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Getting started",
                "Customization",
                "Layout",
                "Content",
                "Forms",
                "Components",
                "About",
            ]
        );
        assert_eq!(titles, CHAPTER_TITLES);
    }

    #[test]
    fn test_rendered_top_level_sections() {
        let page = default_page();
        let content = page.main().child_elements().next().unwrap();
        assert_eq!(content.get_attr("id"), Some("content"));

        let chapters: Vec<_> = content.child_elements().collect();
        assert_eq!(chapters.len(), 7);
        for chapter in chapters {
            assert_eq!(chapter.tag(), "section");
            assert_eq!(chapter.child_elements().next().unwrap().tag(), "h2");
        }
    }

    #[test]
    fn test_section_count_matches_outline() {
        let page = default_page();
        let content = page.main().child_elements().next().unwrap();
        assert_eq!(content.count_descendants("section"), page.toc().len());
    }

    #[test]
    fn test_anchors_unique_with_default_strategy() {
        let page = default_page();
        let toc = page.toc();
        let ids: HashSet<_> = toc.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), toc.len());
    }

    #[test]
    fn test_title_strategy_reproduces_duplicate_anchors() {
        let options = ContentOptions {
            anchors: AnchorStrategy::Title,
            ..ContentOptions::default()
        };
        let page = build_page(&options).unwrap();
        let toc = page.toc();
        let ids: HashSet<_> = toc.iter().map(|e| e.id.as_str()).collect();
        assert!(ids.len() < toc.len());
    }

    #[test]
    fn test_render_is_byte_identical() {
        let page = default_page();
        assert_eq!(page.render().unwrap(), page.render().unwrap());

        let again = default_page();
        assert_eq!(page.render().unwrap(), again.render().unwrap());
    }

    #[test]
    fn test_known_anchors() {
        let html = default_page().render().unwrap();
        assert!(html.contains(r##"<a href="#quick-start" id="quick-start" class="secondary" tabindex="-1">🔗</a>"##));
        assert!(html.contains(r##"id="getting-started""##));
        assert!(html.contains(r##"id="landmarks-&amp;-section""##));
    }

    #[test]
    fn test_demos_present() {
        let html = default_page().render().unwrap();
        assert!(html.contains(r#"<article id="theme-switcher""#));
        assert!(html.contains(r#"<div id="modal"></div>"#));
        assert!(html.contains(r#"data-theme="dark""#));
        assert!(!html.contains("color-picker"));
    }

    #[test]
    fn test_toc_aside_enabled() {
        let options = ContentOptions {
            toc_depth: Some(2),
            ..ContentOptions::default()
        };
        let page = build_page(&options).unwrap();
        let first = page.main().child_elements().next().unwrap();
        assert_eq!(first.tag(), "aside");
    }

    #[test]
    fn test_palette_demo_included_when_configured() {
        let json: Vec<String> = palette::COLORS
            .iter()
            .zip(palette::SHADES)
            .map(|(color, shade)| format!(r##""{color}": {{"{shade}": "#123456"}}"##))
            .collect();
        let palette = Palette::from_json(format!("{{{}}}", json.join(",")).as_bytes()).unwrap();
        let options = ContentOptions {
            palette: Some(palette),
            ..ContentOptions::default()
        };

        let html = build_page(&options).unwrap().render().unwrap();
        assert!(html.contains(r#"<article class="color-picker">"#));
        assert_eq!(html.matches("background: #123456").count(), 20);
    }

    #[test]
    fn test_incomplete_palette_fails() {
        let options = ContentOptions {
            palette: Some(Palette::default()),
            ..ContentOptions::default()
        };
        assert!(matches!(
            build_page(&options),
            Err(ContentError::MissingShade { .. })
        ));
    }
}
