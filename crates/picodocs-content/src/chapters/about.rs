use picodocs_markup::tags::{li, ul};
use picodocs_outline::Section;

use crate::blocks::{external_link, para};

pub(super) fn chapter() -> Section {
    let built_with = ul().children([
        li().child(external_link("Pico CSS", "https://picocss.com")),
        li().child(external_link("htmx", "https://htmx.org")),
        li().child(external_link("highlight.js", "https://highlightjs.org")),
        li().child(external_link("axum", "https://github.com/tokio-rs/axum")),
    ]);

    Section::new("About").subsections([
        Section::new("What’s new in v2?").description(
            "Pico v2.0 features better accessibility, easier customization with SASS, a complete \
             color palette, a new group component, and 20 precompiled color themes totaling over \
             100 combinations accessible via CDN.",
        ),
        Section::new("Mission").description(
            "Pico CSS is a minimalist and lightweight starter kit that prioritizes semantic \
             syntax, making every HTML element responsive and elegant by default.",
        ),
        Section::new("Usage scenarios").description("How does Pico fit into your project?"),
        Section::new("Brand").description("Pico CSS brand assets and usage guidelines."),
        Section::new("Built With")
            .description("Relevant packages, tools, and resources we depend on.")
            .content(para("This page is served with:"))
            .content(built_with),
    ])
}
