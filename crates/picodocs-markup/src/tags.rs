//! One constructor per HTML element.
//!
//! ```
//! use picodocs_markup::tags::{li, ul};
//!
//! let list = ul().child(li().child("one")).child(li().child("two"));
//! assert_eq!(list.child_nodes().len(), 2);
//! ```

use crate::node::Element;

macro_rules! tags {
    ($($name:ident),+ $(,)?) => {
        $(
            #[doc = concat!("Create a `<", stringify!($name), ">` element.")]
            #[must_use]
            pub fn $name() -> Element {
                Element::new(stringify!($name))
            }
        )+
    };
}

tags!(
    a, abbr, article, aside, blockquote, body, br, button, cite, code, del, details, dialog, div, em,
    fieldset, footer, form, h1, h2, h3, h4, h5, h6, head, header, hgroup, hr, html, i, input,
    ins, kbd, label, legend, li, link, main, mark, meta, nav, ol, option, p, pre, progress, s,
    script, section, select, small, span, strong, sub, summary, sup, table, tbody, td, textarea,
    tfoot, th, thead, title, tr, u, ul,
);

/// Create a heading element for a level in `1..=6`.
///
/// Returns `None` for any other level.
#[must_use]
pub fn heading_tag(level: u8) -> Option<Element> {
    match level {
        1 => Some(h1()),
        2 => Some(h2()),
        3 => Some(h3()),
        4 => Some(h4()),
        5 => Some(h5()),
        6 => Some(h6()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names() {
        assert_eq!(div().tag(), "div");
        assert_eq!(hgroup().tag(), "hgroup");
        assert_eq!(textarea().tag(), "textarea");
    }

    #[test]
    fn test_heading_tag() {
        for level in 1..=6 {
            let el = heading_tag(level).unwrap();
            assert_eq!(el.tag(), format!("h{level}"));
        }
        assert!(heading_tag(0).is_none());
        assert!(heading_tag(7).is_none());
    }
}
