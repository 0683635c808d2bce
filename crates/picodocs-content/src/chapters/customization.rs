use picodocs_outline::Section;

use crate::ContentError;
use crate::blocks::{c, div_code, external_link, para, pico_link, prose};
use crate::palette::{Palette, color_picker};

pub(super) fn chapter(palette: Option<&Palette>) -> Result<Section, ContentError> {
    let css_variables = Section::new("CSS Variables")
        .description(
            "Customize Pico's design system with over 130 CSS variables to create a unique look \
             and feel.",
        )
        .content(prose(vec![
            "Pico includes many custom properties (variables) that allow easy access to \
             frequently used values such as "
                .into(),
            c("font-family").into(),
            ", ".into(),
            c("font-size").into(),
            " and ".into(),
            c("border-radius").into(),
            ".".into(),
        ]))
        .content(div_code(
            "[data-theme=light],\n:root:not([data-theme=dark]) {\n  --pico-primary: #c52f21;\n}",
            Some("css"),
        ));

    let sass = Section::new("Sass")
        .description((
            "Build your own minimal design system by compiling a custom version of Pico CSS \
             framework with ",
            pico_link("SASS", "sass"),
            ".",
        ))
        .content(div_code(
            "@use \"pico\" with (\n  $theme-color: \"pumpkin\"\n);",
            Some("scss"),
        ));

    let mut colors = Section::new("Colors")
        .description(
            "Pico comes with 380 manually crafted colors to help you personalize your brand \
             design system.",
        )
        .content(para((
            "All colors are available as ",
            external_link("SCSS, CSS and JSON", "https://github.com/picocss/pico/tree/main/scss/colors"),
            " files.",
        )));
    if let Some(palette) = palette {
        colors = colors.content(color_picker(palette)?);
    }

    Ok(Section::new("Customization").subsections([css_variables, sass, colors]))
}
