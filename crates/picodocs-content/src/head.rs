//! Document `<head>`: metadata, stylesheets and scripts.

use picodocs_markup::Node;
use picodocs_markup::tags::{link, meta, script};

use crate::ContentOptions;

/// htmx, which drives the theme switcher and the modal.
const HTMX_JS: &str = "https://cdn.jsdelivr.net/npm/htmx.org@2/dist/htmx.min.js";

/// highlight.js core.
const HIGHLIGHT_JS: &str =
    "https://cdn.jsdelivr.net/gh/highlightjs/cdn-release@11/build/highlight.min.js";

/// highlight.js theme.
const HIGHLIGHT_CSS: &str =
    "https://cdn.jsdelivr.net/gh/highlightjs/cdn-release@11/build/styles/atom-one-dark.min.css";

/// Highlight `.highlight` blocks on load and in every htmx swap.
const HIGHLIGHT_INIT: &str = "htmx.onLoad(function (elt) { \
    elt.querySelectorAll('.highlight').forEach(function (block) { hljs.highlightElement(block); }); \
});";

fn stylesheet(href: &str) -> Node {
    link()
        .attr("rel", "stylesheet")
        .attr("href", href)
        .attr("type", "text/css")
        .into()
}

fn script_src(src: &str) -> Node {
    script().attr("src", src).into()
}

/// Stylesheet URLs linked from the page head, in document order.
pub fn stylesheet_urls(options: &ContentOptions) -> Vec<&str> {
    let mut urls = vec![options.pico_css.as_str()];
    urls.extend(options.stylesheets.iter().map(String::as_str));
    urls.push(HIGHLIGHT_CSS);
    urls
}

/// Script URLs loaded by the page head, in document order.
pub fn script_urls(options: &ContentOptions) -> Vec<&str> {
    let mut urls = vec![HTMX_JS, HIGHLIGHT_JS];
    urls.extend(options.scripts.iter().map(String::as_str));
    urls
}

/// Head nodes in document order.
pub(crate) fn head_nodes(options: &ContentOptions) -> Vec<Node> {
    let mut nodes = vec![
        meta().attr("charset", "utf-8").into(),
        meta()
            .attr("name", "viewport")
            .attr("content", "width=device-width, initial-scale=1")
            .into(),
        meta()
            .attr("name", "color-scheme")
            .attr("content", "light dark")
            .into(),
    ];
    nodes.extend(stylesheet_urls(options).into_iter().map(stylesheet));
    nodes.extend(script_urls(options).into_iter().map(script_src));
    nodes.push(script().child(HIGHLIGHT_INIT).into());
    nodes
}
