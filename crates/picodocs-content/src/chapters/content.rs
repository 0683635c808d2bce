use picodocs_markup::Element;
use picodocs_markup::tags::{
    a, abbr, article, blockquote, button, cite, del, div, em, footer, h1, h2, h3, h4, h5, h6,
    hgroup, hr, ins, kbd, mark, p, s, small, strong, sub, sup, table, tbody, td, tfoot, th,
    thead, tr, u,
};
use picodocs_outline::Section;

use crate::blocks::{c, code_footer, html_code, para, prose, tag_code};

const PLANETS: [(&str, &str, &str, &str); 3] = [
    ("Mercury", "4,880", "0.39", "88"),
    ("Venus", "12,104", "0.72", "225"),
    ("Earth", "12,742", "1.00", "365"),
];

pub(super) fn chapter() -> Section {
    Section::new("Content").subsections([typography(), link(), button_section(), table_section()])
}

fn typography() -> Section {
    let headings = Section::new("Headings")
        .content(
            article().class("component").children([
                h1().child("Heading 1"),
                h2().child("Heading 2"),
                h3().child("Heading 3"),
                h4().child("Heading 4"),
                h5().child("Heading 5"),
                h6().child("Heading 6"),
            ]),
        )
        .content(html_code(
            "<h1>Heading 1</h1>\n<h2>Heading 2</h2>\n<h3>Heading 3</h3>\n\
             <h4>Heading 4</h4>\n<h5>Heading 5</h5>\n<h6>Heading 6</h6>",
        ));

    let heading_group = Section::new("Heading group")
        .content(prose(vec![
            "Inside a ".into(),
            tag_code("<hgroup>").into(),
            ", all ".into(),
            tag_code(":not(:first-child)").into(),
            " elements have a reduced ".into(),
            c("--pico-color").into(),
            " and a smaller ".into(),
            c("font-size").into(),
            ".".into(),
        ]))
        .content(
            article().class("component").child(
                hgroup()
                    .child(h2().child("Ant-Man and the Wasp: Quantumania"))
                    .child(p().child("A Marvel Studios film")),
            ),
        );

    let inline = [
        (abbr().attr("title", "Abbreviation").child("Abbr."), "<abbr>"),
        (strong().child("Bold"), "<strong>"),
        (em().child("Italic"), "<em>"),
        (del().child("Deleted"), "<del>"),
        (ins().child("Inserted"), "<ins>"),
        (kbd().child("Ctrl + S"), "<kbd>"),
        (mark().child("Highlighted"), "<mark>"),
        (s().child("Strikethrough"), "<s>"),
        (small().child("Small"), "<small>"),
        (p().child(("Text ", sub().child("Sub"))), "<sub>"),
        (p().child(("Text ", sup().child("Sup"))), "<sup>"),
        (u().child("Underline"), "<u>"),
    ];
    let inline_table = table().child(tbody().children(
        inline
            .into_iter()
            .map(|(demo, tag)| tr().child(td().child(demo)).child(td().child(tag_code(tag)))),
    ));
    let inline_text = Section::new("Inline text elements").content(inline_table);

    let quote = Section::new("Blockquote").content(
        blockquote()
            .child("\"Maecenas vehicula metus tellus, vitae congue turpis hendrerit non. Nam at dui sit amet ipsum cursus ornare.\"")
            .child(footer().child(cite().child("- Phasellus eget lacinia"))),
    );

    let rule = Section::new("Horizontal rule").content(para((
        tag_code("<hr>"),
        " has a subtle border to separate content.",
    )));

    Section::new("Typography")
        .description(
            "All typographic elements are responsive and scale gracefully across devices and \
             viewports.",
        )
        .content(hr())
        .subsections([headings, heading_group, inline_text, quote, rule])
}

fn link() -> Section {
    let demo = article()
        .class("component")
        .child(a().attr("href", "#").child("Primary"))
        .child(" ")
        .child(a().attr("href", "#").class("secondary").child("Secondary"))
        .child(" ")
        .child(a().attr("href", "#").class("contrast").child("Contrast"))
        .child(code_footer(
            "<a href=\"#\">Primary</a>\n<a href=\"#\" class=\"secondary\">Secondary</a>\n\
             <a href=\"#\" class=\"contrast\">Contrast</a>",
        ));

    Section::new("Link")
        .description(("Links come with ", c(".secondary"), " and ", c(".contrast"), " styles."))
        .content(demo)
}

fn button_section() -> Section {
    let syntax = Section::new("Syntax").content(
        article()
            .class("component")
            .child(button().child("Button"))
            .child(code_footer("<button>Button</button>")),
    );

    let variants = Section::new("Variants").content(
        article()
            .class("component")
            .child(div().class("grid").children([
                button().class("secondary").child("Secondary"),
                button().class("contrast").child("Contrast"),
                button().class("outline").child("Outline"),
            ]))
            .child(code_footer(
                "<button class=\"secondary\">Secondary</button>\n\
                 <button class=\"contrast\">Contrast</button>\n\
                 <button class=\"outline\">Outline</button>",
            )),
    );

    let disabled = Section::new("Disabled").content(
        article()
            .class("component")
            .child(button().attr("disabled", "").child("Disabled"))
            .child(code_footer("<button disabled>Disabled</button>")),
    );

    Section::new("Button")
        .description((
            "Buttons are using the native ",
            tag_code("<button>"),
            " tag, without ",
            c(".classes"),
            ", for the default style.",
        ))
        .subsections([syntax, variants, disabled])
}

fn table_section() -> Section {
    let syntax = Section::new("Syntax").content(planets(None));

    let color_schemes = Section::new("Color schemes")
        .content(para((
            "Tables can be forced into a color scheme with ",
            c("data-theme"),
            ".",
        )))
        .content(planets(Some("dark")));

    let striped = Section::new("Striped")
        .content(para((c(".striped"), " enables striped rows.")))
        .content(planets(None).class("striped"));

    Section::new("Table")
        .description((
            "Clean and minimal styles for ",
            tag_code("<table>"),
            ", providing consistent spacings and a minimal unbordered look.",
        ))
        .subsections([syntax, color_schemes, striped])
}

/// The planets table, optionally forced into a color scheme.
fn planets(theme: Option<&str>) -> Element {
    let header = tr().children([
        th().attr("scope", "col").child("Planet"),
        th().attr("scope", "col").child("Diameter (km)"),
        th().attr("scope", "col").child("Distance to Sun (AU)"),
        th().attr("scope", "col").child("Orbit (days)"),
    ]);
    let rows = PLANETS.iter().map(|(planet, diameter, distance, orbit)| {
        tr().child(th().attr("scope", "row").child(*planet))
            .child(td().child(*diameter))
            .child(td().child(*distance))
            .child(td().child(*orbit))
    });

    let mut planets = table()
        .child(thead().child(header))
        .child(tbody().children(rows))
        .child(tfoot().child(tr().children([
            th().attr("scope", "row").child("Average"),
            td().child("9,126"),
            td().child("0.91"),
            td().child("341"),
        ])));
    if let Some(theme) = theme {
        planets.set_attr("data-theme", theme);
    }
    planets
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_planets_table() {
        let table = planets(Some("dark"));
        assert_eq!(table.get_attr("data-theme"), Some("dark"));
        assert_eq!(table.count_descendants("tr"), 5);
        assert_eq!(planets(None).get_attr("data-theme"), None);
    }

    #[test]
    fn test_syntax_subsections_repeat() {
        let chapter = chapter();
        let syntax = chapter
            .children()
            .flat_map(|s| s.children())
            .filter(|s| s.title() == "Syntax")
            .count();
        assert_eq!(syntax, 2);
    }

    #[test]
    fn test_inline_text_table() {
        let typography = typography();
        let inline = typography
            .children()
            .find(|s| s.title() == "Inline text elements")
            .unwrap();
        assert_eq!(inline.items().len(), 1);
    }
}
