//! The seven top-level chapters, in page order.

mod about;
mod components;
mod content;
mod customization;
mod forms;
mod getting_started;
mod layout;

use picodocs_outline::Section;

use crate::{ContentError, ContentOptions};

/// Titles of the top-level chapters, in page order.
pub const CHAPTER_TITLES: [&str; 7] = [
    "Getting started",
    "Customization",
    "Layout",
    "Content",
    "Forms",
    "Components",
    "About",
];

/// Build every chapter.
pub(crate) fn all(options: &ContentOptions) -> Result<Vec<Section>, ContentError> {
    Ok(vec![
        getting_started::chapter(),
        customization::chapter(options.palette.as_ref())?,
        layout::chapter(),
        content::chapter(),
        forms::chapter(),
        components::chapter(),
        about::chapter(),
    ])
}
