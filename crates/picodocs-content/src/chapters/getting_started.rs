use picodocs_markup::Element;
use picodocs_markup::tags::{
    article, button, code, fieldset, footer, form, h2, input, label, p, pre,
};
use picodocs_outline::Section;

use crate::blocks::{c, div_code, external_link, hl, html_code, para, tag_code};
use crate::theme::theme_switch;

const STARTER_HTML: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="color-scheme" content="light dark" />
    <link rel="stylesheet" href="css/pico.min.css">
    <title>Hello world!</title>
  </head>
  <body>
    <main class="container">
      <h1>Hello world!</h1>
    </main>
  </body>
</html>"#;

const STARTER_RUST: &str = r#"use picodocs_outline::{PageBuilder, Section};
use picodocs_markup::tags::{link, meta};

let page = PageBuilder::new("Hello world!")
    .head(meta().attr("charset", "utf-8"))
    .head(meta().attr("name", "viewport").attr("content", "width=device-width, initial-scale=1"))
    .head(meta().attr("name", "color-scheme").attr("content", "light dark"))
    .head(link().attr("rel", "stylesheet").attr("href", "css/pico.min.css"))
    .section(Section::new("Hello world!"))
    .build()?;

println!("{}", page.render()?);"#;

pub(super) fn chapter() -> Section {
    Section::new("Getting started").subsections([
        quick_start(),
        Section::new("Version picker").description(
            "Easily select the ideal Pico CSS version variant to match your project's needs.",
        ),
        color_schemes(),
        Section::new("Class-less version").description((
            "Embrace minimalism with Pico’s ",
            c(".classless"),
            " version, a semantic option for wild HTML purists who prefer a stripped-down approach.",
        )),
        Section::new("Conditional styling").description((
            "Apply Pico CSS styles selectively by wrapping elements in a ",
            c(".pico"),
            " container, ideal for mixed-style environments.",
        )),
        Section::new("RTL").description("Support for Right-To-Left text."),
    ])
}

fn quick_start() -> Section {
    let install_manually = Section::new("Install manually")
        .content(para((
            external_link(
                "Download Pico",
                "https://github.com/picocss/pico/archive/refs/heads/main.zip",
            ),
            " and link ",
            c("/css/pico.min.css"),
            " in the ",
            tag_code("<head>"),
            " of your website.",
        )))
        .content(html_code(r#"<link rel="stylesheet" href="css/pico.min.css" />"#));

    let usage_from_cdn = Section::new("Usage from CDN")
        .content(para((
            "Alternatively, you can use ",
            external_link("jsDelivr CDN", "https://cdn.jsdelivr.net/npm/@picocss/pico@2/"),
            " to link ",
            c("pico.min.css"),
            ".",
        )))
        .content(html_code(
            "<link \n  rel=\"stylesheet\" \n  href=\"https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css\"\n/>",
        ));

    let usage_with_npm = Section::new("Usage with NPM")
        .content(div_code("npm install @picocss/pico", Some("shell")))
        .content(para(("Then, import Pico into your SCSS file with ", hl("@use"), ":")))
        .content(div_code(r#"@use "pico";"#, Some("scss")));

    let install_with_composer = Section::new("Install with Composer")
        .content(div_code("composer require picocss/pico", Some("shell")));

    let starter_template = Section::new("Starter HTML template")
        .content(html_code(STARTER_HTML))
        .content(p().class("rs-cue").child("Rust 🡇"))
        .content(div_code(STARTER_RUST, Some("rust")));

    Section::new("Quick start")
        .description((
            "Link ",
            c("pico.css"),
            " manually or via CDN for a dependency-free setup, or use NPM or Composer for advanced usage.",
        ))
        .content(p().child("There are 4 ways to get started with pico.css:"))
        .subsections([
            install_manually,
            usage_from_cdn,
            usage_with_npm,
            install_with_composer,
            starter_template,
        ])
}

fn color_schemes() -> Section {
    let tag_list = [
        "<a>",
        "<button>",
        "<table>",
        "<input>",
        "<textarea>",
        "<select>",
        "<article>",
        "<dialog>",
        "<progress>",
    ];
    let mut tags = p().child("Color schemes at the HTML tag level work great for elements such as ");
    for (i, tag) in tag_list.iter().enumerate() {
        if i > 0 {
            tags.push(", ");
        }
        tags.push(tag_code(tag));
    }
    tags.push(".");

    let usage = Section::new("Usage")
        .content(para((
            "Color schemes can be defined for the entire document using ",
            tag_code(r#"<html data-theme="light">"#),
            " or for specific HTML elements, such as ",
            tag_code(r#"<article data-theme="dark">"#),
            ".",
        )))
        .content(tags)
        .content(para(
            "CSS variables specific to the color scheme are assigned to every HTML tag. \
             However, we have not enforced specific background and color settings across all \
             HTML tags to maintain transparent backgrounds and ensure colors are inherited from \
             the parent tag.",
        ))
        .content(para((
            "For some other HTML tags, you might need to explicitly set ",
            hl("background-color"),
            " and ",
            hl("color"),
            ".",
        )))
        .content(div_code(
            "section {\n  background-color: var(--pico-background-color);\n  color: var(--pico-color);\n}",
            Some("css"),
        ));

    let card_example = Section::new("Card example")
        .content(themed_card("light"))
        .content(themed_card("dark"));

    Section::new("Color Schemes")
        .description(
            "Pico CSS comes with both Light and Dark color schemes, automatically enabled based \
             on user preferences.",
        )
        .content(para((
            "The default color scheme is Light. The Dark scheme is automatically enabled if the \
             user has dark mode enabled ",
            hl("prefers-color-scheme: dark;"),
            ".",
        )))
        .content(theme_switch())
        .subsections([usage, card_example])
}

/// A login card forced into `theme`.
fn themed_card(theme: &str) -> Element {
    let heading = if theme == "dark" { "Dark card" } else { "Light card" };
    let source = format!("<article data-theme=\"{theme}\">\n  …\n</article>");

    let login = fieldset()
        .class("grid")
        .child(
            input()
                .attr("type", "text")
                .attr("name", "login")
                .attr("placeholder", "Login")
                .attr("aria-label", "Login")
                .attr("autocomplete", "username"),
        )
        .child(
            input()
                .attr("type", "password")
                .attr("name", "password")
                .attr("placeholder", "Password")
                .attr("aria-label", "Password")
                .attr("autocomplete", "current-password"),
        )
        .child(button().attr("type", "submit").child("Login"));

    let remember = fieldset().child(
        label()
            .child(
                input()
                    .attr("type", "checkbox")
                    .attr("role", "switch")
                    .attr("name", "switch")
                    .attr("checked", ""),
            )
            .child("Remember me"),
    );

    article()
        .class("card")
        .attr("data-theme", theme)
        .attr("aria-label", format!("Forced {theme} theme example"))
        .child(h2().child(heading))
        .child(form().child(login).child(remember))
        .child(
            footer()
                .class("code")
                .child(pre().child(code().class("highlight language-html").child(source))),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quick_start_has_four_ways_and_template() {
        let chapter = chapter();
        let quick_start = chapter.children().next().unwrap();
        let titles: Vec<_> = quick_start.children().map(Section::title).collect();
        assert_eq!(
            titles,
            vec![
                "Install manually",
                "Usage from CDN",
                "Usage with NPM",
                "Install with Composer",
                "Starter HTML template",
            ]
        );
    }

    #[test]
    fn test_themed_cards() {
        let dark = themed_card("dark");
        assert_eq!(dark.get_attr("data-theme"), Some("dark"));
        assert_eq!(dark.get_attr("aria-label"), Some("Forced dark theme example"));
        assert_eq!(dark.count_descendants("input"), 3);
        assert!(dark.text_content().contains("Dark card"));
        assert!(themed_card("light").text_content().contains("Light card"));
    }

    #[test]
    fn test_color_schemes_embed_switcher() {
        let page = picodocs_outline::PageBuilder::new("Color schemes")
            .section(color_schemes())
            .build()
            .unwrap();
        let html = page.render().unwrap();
        assert!(html.contains(r#"<article id="theme-switcher""#));
        assert!(html.contains(r#"<article class="card" data-theme="light""#));
    }
}
