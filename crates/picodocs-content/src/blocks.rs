//! Small building blocks shared by the chapters.

use picodocs_markup::tags::{a, article, code, div, footer, p, pre};
use picodocs_markup::{Element, Node};

/// A `<div class="pre-code">` wrapping a highlighted code block.
pub(crate) fn div_code(source: &str, lang: Option<&str>) -> Element {
    let class = match lang {
        Some(lang) => format!("highlight language-{lang}"),
        None => "highlight".to_owned(),
    };
    div()
        .class("pre-code")
        .child(pre().child(code().class(class).child(source)))
}

/// Highlighted HTML code block.
pub(crate) fn html_code(source: &str) -> Element {
    div_code(source, Some("html"))
}

/// Inline code highlighted as HTML, e.g. a tag name.
pub(crate) fn tag_code(source: &str) -> Element {
    code().class("highlight language-html").child(source)
}

/// Inline code highlighted with the default language.
pub(crate) fn hl(source: &str) -> Element {
    code().class("highlight").child(source)
}

/// Plain inline code.
pub(crate) fn c(source: &str) -> Element {
    code().child(source)
}

/// Link to a page on picocss.com.
pub(crate) fn pico_link(label: &str, path: &str) -> Element {
    a().attr("href", format!("https://picocss.com/docs/{path}"))
        .child(label)
}

/// Link opening in a new tab.
pub(crate) fn external_link(label: &str, href: &str) -> Element {
    a().attr("rel", "noopener noreferrer")
        .attr("href", href)
        .attr("target", "_blank")
        .child(label)
}

/// A paragraph from mixed inline content.
pub(crate) fn para(parts: impl Into<Node>) -> Element {
    p().child(parts)
}

/// A paragraph from more inline parts than a tuple holds.
pub(crate) fn prose(parts: Vec<Node>) -> Element {
    p().children(parts)
}

/// Footer holding the source of a live demo.
pub(crate) fn code_footer(source: &str) -> Element {
    footer().class("code").child(html_code(source))
}

/// A live demo followed by its source.
pub(crate) fn component_demo(component: Element, source: &str) -> Element {
    article()
        .class("component")
        .child(component)
        .child(code_footer(source))
}
