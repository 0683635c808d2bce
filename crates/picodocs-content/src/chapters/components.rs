use picodocs_markup::Element;
use picodocs_markup::tags::{
    a, article, button, details, div, footer, header, input, li, nav, p, progress, span, strong,
    summary, ul,
};
use picodocs_outline::Section;

use crate::blocks::{c, component_demo as demo, html_code, tag_code};
use crate::modal::modal_launcher;

pub(super) fn chapter() -> Section {
    Section::new("Components").subsections([
        Section::new("Accordion")
            .description(
                "Toggle sections of content in pure HTML, without JavaScript, using minimal and \
                 semantic markup.",
            )
            .content(demo(
                div()
                    .child(accordion("Accordion 1", false))
                    .child(accordion("Accordion 2", true)),
                "<details>\n  <summary>Accordion 1</summary>\n  <p>…</p>\n</details>\n<hr />\n<details open>\n  <summary>Accordion 2</summary>\n  <p>…</p>\n</details>",
            )),
        Section::new("Card")
            .description(
                "Create flexible cards with a semantic markup that provides graceful spacings \
                 across various devices and viewports.",
            )
            .content(
                article()
                    .child(header().child("Header"))
                    .child("Body")
                    .child(footer().child("Footer")),
            )
            .content(html_code(
                "<article>\n  <header>Header</header>\n  Body\n  <footer>Footer</footer>\n</article>",
            )),
        Section::new("Dropdown").description(
            "Create dropdown menus and custom selects with minimal and semantic HTML, without \
             JavaScript.",
        ),
        Section::new("Group")
            .description((
                "Stack forms elements and buttons horizontally with ",
                c("role='group'"),
                " and ",
                c("role='search'"),
                ".",
            ))
            .content(demo(
                div()
                    .attr("role", "group")
                    .child(button().child("Button"))
                    .child(button().child("Button"))
                    .child(button().child("Button")),
                "<div role=\"group\">\n  <button>Button</button>\n  <button>Button</button>\n  <button>Button</button>\n</div>",
            )),
        Section::new("Loading")
            .description(("Add a loading indicator with ", c("aria-busy='true'"), "."))
            .content(demo(
                span().attr("aria-busy", "true").child("Generating your link..."),
                "<span aria-busy=\"true\">Generating your link...</span>",
            )),
        Section::new("Modal")
            .description((
                "The classic modal component with graceful spacings across devices and \
                 viewports, using the semantic HTML tag ",
                tag_code("<dialog>"),
                ".",
            ))
            .content(modal_launcher()),
        Section::new("Nav")
            .description("The essential navbar component in pure semantic HTML.")
            .content(demo(
                nav()
                    .child(ul().child(li().child(strong().child("Acme Corp"))))
                    .child(ul().children(
                        ["About", "Services", "Products"]
                            .map(|item| li().child(a().attr("href", "#").child(item))),
                    )),
                "<nav>\n  <ul>\n    <li><strong>Acme Corp</strong></li>\n  </ul>\n  <ul>\n    <li><a href=\"#\">About</a></li>\n    …\n  </ul>\n</nav>",
            )),
        Section::new("Progress")
            .description("The progress bar element in pure HTML, without JavaScript.")
            .content(demo(
                progress().attr("value", "32").attr("max", "100"),
                "<progress value=\"32\" max=\"100\" />",
            )),
        Section::new("Tooltip")
            .description("Enable tooltips everywhere, without JavaScript.")
            .content(demo(
                p().child("Tooltip on a ")
                    .child(a().attr("href", "#").attr("data-tooltip", "Tooltip").child("link"))
                    .child(" and a button: ")
                    .child(input().attr("type", "button").attr("value", "Button").attr("data-tooltip", "Tooltip")),
                "<a href=\"#\" data-tooltip=\"Tooltip\">link</a>",
            )),
    ])
}

fn accordion(title: &str, open: bool) -> Element {
    let mut item = details()
        .child(summary().child(title))
        .child(p().child("Donec in consectetur est. Nulla nec magna facilisis, ultricies orci vel, pharetra mauris."));
    if open {
        item.set_attr("open", "");
    }
    item
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nine_components() {
        let titles: Vec<_> = chapter().children().map(|s| s.title().to_owned()).collect();
        assert_eq!(
            titles,
            vec![
                "Accordion", "Card", "Dropdown", "Group", "Loading", "Modal", "Nav", "Progress",
                "Tooltip",
            ]
        );
    }

    #[test]
    fn test_modal_section_has_launcher() {
        let page = picodocs_outline::PageBuilder::new("Components")
            .section(chapter())
            .build()
            .unwrap();
        let html = page.render().unwrap();
        assert!(html.contains(r#"hx-get="/modal""#));
        assert!(html.contains(r#"<div id="modal"></div>"#));
    }

    #[test]
    fn test_accordion_open_state() {
        assert_eq!(accordion("A", true).get_attr("open"), Some(""));
        assert_eq!(accordion("A", false).get_attr("open"), None);
    }
}
