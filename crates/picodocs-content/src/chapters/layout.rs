use picodocs_markup::Element;
use picodocs_markup::tags::{a, article, div, strong, table, tbody, td, th, thead, tr};
use picodocs_outline::Section;

use crate::blocks::{c, code_footer, div_code, hl, html_code, para, pico_link, prose};

const BREAKPOINTS: [(&str, &str, &str); 6] = [
    ("Extra small", "<576px", "100%"),
    ("Small", "≥576px", "510px"),
    ("Medium", "≥768px", "700px"),
    ("Large", "≥1024px", "950px"),
    ("Extra large", "≥1280px", "1200px"),
    ("Extra extra large", "≥1536px", "1450px"),
];

const CUSTOM_ROOT_SCSS: &str = r##"/* Custom Class-less version for React */
@use "pico" with (
  // Define the root element used to target <header>, <main>, <footer>
  // with $enable-semantic-container and $enable-responsive-spacings
  $semantic-root-element: "#root";

  // Enable <header>, <main>, <footer> inside $semantic-root-element as containers
  $enable-semantic-container: true;

  // Enable .classes
  $enable-classes: false;
)
"##;

pub(super) fn chapter() -> Section {
    Section::new("Layout").subsections([container(), landmarks(), grid(), overflow_auto()])
}

fn container() -> Section {
    let rows = BREAKPOINTS.iter().map(|(device, breakpoint, viewport)| {
        tr().child(td().child(*device))
            .child(td().child(*breakpoint))
            .child(td().child(*viewport))
    });
    let breakpoints = Section::new("Breakpoints")
        .content(para((
            "Pico includes six default breakpoints. These breakpoints can be customized with ",
            pico_link("Sass", "sass"),
            ".",
        )))
        .content(
            table()
                .child(thead().child(tr().children([
                    th().child("Device"),
                    th().child("Breakpoint"),
                    th().child("Viewport"),
                ])))
                .child(tbody().children(rows)),
        )
        .content(prose(vec![
            c(".container").into(),
            " and ".into(),
            c(".container-fluid").into(),
            " are not available in the ".into(),
            pico_link("class‑less version", "classless").into(),
            " (see ".into(),
            pico_link("Semantic containers", "container#semantic-containers").into(),
            " for an alternative).".into(),
        ]));

    let fixed_width = Section::new("Fixed width")
        .content(para((c(".container"), " provides a centered container with a fixed width.")))
        .content(html_code("<body>\n  <main class=\"container\">\n    ...\n  </main>\n</body>\n"));

    let fluid_width = Section::new("Fluid width")
        .content(para((c(".container-fluid"), " provides a full-width container.")))
        .content(html_code(
            "<body>\n  <main class=\"container-fluid\">\n    ...\n  </main>\n</body>\n",
        ));

    let semantic = Section::new("Semantic containers")
        .content(prose(vec![
            "In the classless version, ".into(),
            hl("<header>").into(),
            ", ".into(),
            hl("<main>").into(),
            ", and ".into(),
            hl("<footer>").into(),
            " inside ".into(),
            hl("<body>").into(),
            " act as containers to define a centered or a fluid viewport.".into(),
        ]))
        .content(para(("See ", pico_link("Class-less version", "classless"), ".")));

    Section::new("Container")
        .description((
            "Use ",
            c(".container"),
            " for a centered viewport or ",
            c(".container-fluid"),
            " for a full-width layout.",
        ))
        .subsections([breakpoints, fixed_width, fluid_width, semantic])
}

fn landmarks() -> Section {
    let landmarks = Section::new("Landmarks")
        .content(prose(vec![
            hl("<header>").into(),
            ", ".into(),
            hl("<main>").into(),
            ", and ".into(),
            hl("<footer>").into(),
            " as direct children of ".into(),
            hl("<body>").into(),
            " provide a responsive vertical padding.".into(),
        ]))
        .content(html_code(
            "<body>\n  <header>...</header>\n  <main>...</main>\n  <footer>...</footer>\n</body>\n",
        ));

    let custom_root = Section::new("Custom root container")
        .content(prose(vec![
            "If you need to customize the default root container for ".into(),
            hl("<header>").into(),
            ", ".into(),
            hl("<main>").into(),
            ", and ".into(),
            hl("<footer>").into(),
            ", you can recompile Pico with another CSS selector.".into(),
        ]))
        .content(prose(vec![
            "Useful for ".into(),
            a().attr("href", "https://reactjs.org/").child("React").into(),
            ", ".into(),
            a().attr("href", "https://www.gatsbyjs.com/").child("Gatsby").into(),
            " or ".into(),
            a().attr("href", "https://nextjs.org/").child("Next.js").into(),
            ".".into(),
        ]))
        .content(div_code(CUSTOM_ROOT_SCSS, Some("scss")))
        .content(para("The code above will compile Pico with the containers defined like this:"))
        .content(div_code(
            "/* Containers */\n#root > header,\n#root > main,\n#root > footer {\n  ...\n}\n",
            Some("css"),
        ))
        .content(para((
            "Learn more about ",
            pico_link("compiling a custom version of Pico with SASS", "sass"),
            ".",
        )));

    let section = Section::new("Section").content(para((
        hl("<section>"),
        " provides a responsive margin-bottom to separate your sections.",
    )));

    Section::new("Landmarks & section")
        .description(
            "Structure your pages with semantic landmarks and sections for better accessibility \
             and graceful spacings.",
        )
        .subsections([landmarks, custom_root, section])
}

fn grid() -> Section {
    let demo = article()
        .class("component")
        .child(div().class("grid").children((1..=4).map(|n| div().child(n.to_string()))))
        .child(code_footer(
            "<div class=\"grid\">\n  <div>1</div>\n  <div>2</div>\n  <div>3</div>\n  <div>4</div>\n</div>",
        ));

    let syntax = Section::new("Syntax")
        .content(demo)
        .content(para(("Columns intentionally collapse on small devices (", c("<768px"), ").")))
        .content(para((
            c(".grid"),
            " is not available in the ",
            pico_link("class‑less", "classless"),
            " version.",
        )));

    let about = Section::new("About CSS Grids")
        .content(para("As Pico focuses on native HTML elements, we kept this grid system minimalist."))
        .content(para(
            "A complete grid system in flexbox, with all the ordering, offsetting, and \
             breakpoints utilities, can be heavier than the total size of the Pico library. \
             Not really in the Pico spirit.",
        ))
        .content(prose(vec![
            "If you need a quick way to prototype or build a complex layout, you can look at ".into(),
            strong().child("Flexbox grid layouts").into(),
            ", for example ".into(),
            a().attr("href", "https://getbootstrap.com/docs/4.2/getting-started/contents/")
                .child("Bootstrap Grid System")
                .into(),
            " or ".into(),
            a().attr("href", "http://flexboxgrid.com/").child("Flexbox Grid").into(),
            ".".into(),
        ]))
        .content(prose(vec![
            "If you need a light and custom grid, you can look at CSS Grid Generators, for example ".into(),
            a().attr("href", "https://cssgrid-generator.netlify.com/").child("CSS Grid Generator").into(),
            ", ".into(),
            a().attr("href", "http://grid.layoutit.com/").child("Layoutit!").into(),
            " or ".into(),
            a().attr("href", "https://griddy.io/").child("Griddy").into(),
            ".".into(),
        ]))
        .content(para((
            "Alternatively, you can ",
            a().attr("href", "https://learncssgrid.com/").child("learn about CSS Grid"),
            ".",
        )));

    Section::new("Grid")
        .description((
            "Create minimal responsive layouts with ",
            c(".grid"),
            " to enable auto-layout columns.",
        ))
        .subsections([syntax, about])
}

fn overflow_auto() -> Section {
    Section::new("Overflow auto")
        .description((
            c(".overflow-auto"),
            " enables automatic scrollbars to an element if its content extends beyond its limits.",
        ))
        .content(para(("Useful to have responsive ", hl("<table>"), ".")))
        .content(div().class("overflow-auto").child(wide_table(12, 3)))
        .content(html_code("<div class=\"overflow-auto\">\n  <table>\n    …\n  </table>\n</div>"))
}

/// A table too wide for small viewports.
fn wide_table(columns: usize, rows: usize) -> Element {
    let header = tr().children((0..columns).map(|_| th().child("Heading")));
    let body = (0..rows).map(|_| tr().children((0..columns).map(|_| td().child("Cell"))));
    table()
        .child(thead().child(header))
        .child(tbody().children(body))
}
