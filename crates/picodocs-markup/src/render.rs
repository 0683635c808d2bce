//! HTML5 serialization.

use std::fmt::Write;

use crate::node::{Element, Node};

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose text content is emitted verbatim.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Serialization error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MarkupError {
    /// Element constructed with an empty tag name.
    #[error("Element has an empty tag name")]
    EmptyTag,
    /// Attribute name that cannot appear in HTML.
    #[error("Invalid attribute name {name:?} on <{tag}>")]
    InvalidAttributeName {
        /// Tag of the offending element.
        tag: String,
        /// The rejected attribute name.
        name: String,
    },
    /// Void element given children.
    #[error("Void element <{0}> cannot have children")]
    VoidWithChildren(String),
}

impl Node {
    /// Serialize the node to an HTML string.
    pub fn render(&self) -> Result<String, MarkupError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    /// Serialize the node, appending to `out`.
    ///
    /// On error `out` may hold a partial serialization.
    pub fn render_into(&self, out: &mut String) -> Result<(), MarkupError> {
        match self {
            Self::Text(s) => {
                out.push_str(&escape_html(s));
                Ok(())
            }
            Self::Element(el) => el.render_into(out),
            Self::Fragment(nodes) => nodes.iter().try_for_each(|n| n.render_into(out)),
        }
    }
}

impl Element {
    /// Serialize the element to an HTML string.
    pub fn render(&self) -> Result<String, MarkupError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    /// Serialize the element, appending to `out`.
    pub fn render_into(&self, out: &mut String) -> Result<(), MarkupError> {
        let tag = self.tag();
        if tag.is_empty() {
            return Err(MarkupError::EmptyTag);
        }

        out.push('<');
        out.push_str(tag);
        for (name, value) in self.attributes() {
            if !is_valid_attribute_name(name) {
                return Err(MarkupError::InvalidAttributeName {
                    tag: tag.to_owned(),
                    name: name.clone(),
                });
            }
            write!(out, r#" {name}="{}""#, escape_html(value)).unwrap();
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&tag) {
            if self.child_nodes().iter().any(|n| !n.is_empty()) {
                return Err(MarkupError::VoidWithChildren(tag.to_owned()));
            }
            return Ok(());
        }

        if RAW_TEXT_ELEMENTS.contains(&tag) {
            push_raw_text(self.child_nodes(), out);
        } else {
            for child in self.child_nodes() {
                child.render_into(out)?;
            }
        }

        write!(out, "</{tag}>").unwrap();
        Ok(())
    }
}

/// Append text children unescaped; elements inside raw-text elements are ignored.
fn push_raw_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(s) => out.push_str(s),
            Node::Fragment(inner) => push_raw_text(inner, out),
            Node::Element(_) => {}
        }
    }
}

/// Check an attribute name against the HTML syntax rules.
///
/// Names must be non-empty and must not contain whitespace, control
/// characters, quotes, `>`, `/` or `=`.
fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|c| {
            !c.is_whitespace()
                && !c.is_control()
                && !matches!(c, '"' | '\'' | '>' | '/' | '=' | '<')
        })
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{a, br, code, div, input, p, script};
    use crate::{fragment, text};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_render_nested() {
        let html = div()
            .class("grid")
            .child(div().child("1"))
            .child(div().child("2"))
            .render()
            .unwrap();
        assert_eq!(html, r#"<div class="grid"><div>1</div><div>2</div></div>"#);
    }

    #[test]
    fn test_render_escapes_text_and_attributes() {
        let html = code()
            .attr("title", r#"say "hi""#)
            .child("<head>")
            .render()
            .unwrap();
        assert_eq!(
            html,
            r#"<code title="say &quot;hi&quot;">&lt;head&gt;</code>"#
        );
    }

    #[test]
    fn test_render_void_element() {
        let html = input()
            .attr("type", "checkbox")
            .attr("checked", "")
            .render()
            .unwrap();
        assert_eq!(html, r#"<input type="checkbox" checked="">"#);
        assert_eq!(br().render().unwrap(), "<br>");
    }

    #[test]
    fn test_render_void_element_with_children_fails() {
        let err = br().child("oops").render().unwrap_err();
        assert_eq!(err, MarkupError::VoidWithChildren("br".to_owned()));
    }

    #[test]
    fn test_render_empty_non_void_element() {
        assert_eq!(div().id("modal").render().unwrap(), r#"<div id="modal"></div>"#);
    }

    #[test]
    fn test_render_script_is_raw() {
        let html = script()
            .child("document.documentElement.setAttribute('data-theme', 'dark');")
            .render()
            .unwrap();
        assert_eq!(
            html,
            "<script>document.documentElement.setAttribute('data-theme', 'dark');</script>"
        );
    }

    #[test]
    fn test_render_fragment_is_transparent() {
        let node = fragment([p().child("one"), p().child("two")]);
        assert_eq!(node.render().unwrap(), "<p>one</p><p>two</p>");
        assert_eq!(fragment(Vec::<crate::Node>::new()).render().unwrap(), "");
    }

    #[test]
    fn test_render_empty_tag_fails() {
        let err = Element::new("").render().unwrap_err();
        assert_eq!(err, MarkupError::EmptyTag);
    }

    #[test]
    fn test_render_invalid_attribute_name_fails() {
        let err = a().attr("on click", "x").render().unwrap_err();
        assert_eq!(
            err,
            MarkupError::InvalidAttributeName {
                tag: "a".to_owned(),
                name: "on click".to_owned(),
            }
        );
        assert!(a().attr("", "x").render().is_err());
        assert!(a().attr("x=y", "x").render().is_err());
    }

    #[test]
    fn test_render_accepts_htmx_and_aria_names() {
        let html = a()
            .attr("hx-post", "/toggle_theme")
            .attr("aria-label", "Theme")
            .attr("data-theme", "light")
            .render()
            .unwrap();
        assert_eq!(
            html,
            r#"<a hx-post="/toggle_theme" aria-label="Theme" data-theme="light"></a>"#
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let node: crate::Node = p().child(text("x")).child(code().child("y")).into();
        assert_eq!(node.render().unwrap(), node.render().unwrap());
    }
}
