//! Color palette demo.
//!
//! The palette file maps Pico color names to shades to CSS color values:
//!
//! ```json
//! { "red": { "550": "#c52f21", "500": "#d93526" } }
//! ```

use std::collections::HashMap;

use picodocs_markup::Element;
use picodocs_markup::tags::{article, div, header, strong};

use crate::ContentError;

/// Colors shown in the picker, in display order.
pub const COLORS: [&str; 20] = [
    "red", "pink", "fuchsia", "purple", "violet", "indigo", "blue", "azure", "cyan", "jade",
    "green", "lime", "yellow", "amber", "pumpkin", "orange", "sand", "grey", "zinc", "slate",
];

/// Shade shown for each entry of [`COLORS`].
pub const SHADES: [&str; 20] = [
    "550", "500", "550", "600", "600", "600", "550", "550", "550", "550", "500", "200", "100",
    "200", "300", "500", "200", "300", "550", "600",
];

/// Pico color palette.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    colors: HashMap<String, HashMap<String, String>>,
}

impl Palette {
    /// Parse a palette file.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ContentError> {
        let colors = serde_json::from_slice(bytes).map_err(ContentError::Palette)?;
        Ok(Self { colors })
    }

    /// Look up a color value.
    pub fn color(&self, color: &str, shade: &str) -> Result<&str, ContentError> {
        self.colors
            .get(color)
            .and_then(|shades| shades.get(shade))
            .map(String::as_str)
            .ok_or_else(|| ContentError::MissingShade {
                color: color.to_owned(),
                shade: shade.to_owned(),
            })
    }
}

/// Build the color picker: one dot per entry of [`COLORS`].
pub fn color_picker(palette: &Palette) -> Result<Element, ContentError> {
    let dots = COLORS
        .iter()
        .zip(SHADES)
        .map(|(color, shade)| {
            let value = palette.color(color, shade)?;
            Ok(div()
                .attr("style", format!("background: {value}"))
                .class("color-pick")
                .attr("title", format!("{color}-{shade}"))
                .child(strong().child("●")))
        })
        .collect::<Result<Vec<_>, ContentError>>()?;

    Ok(article()
        .class("color-picker")
        .child(header().class("grid").children(dots)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn full_palette() -> Palette {
        let entries: Vec<String> = COLORS
            .iter()
            .zip(SHADES)
            .enumerate()
            .map(|(i, (color, shade))| format!(r##""{color}": {{"{shade}": "#0000{i:02}"}}"##))
            .collect();
        Palette::from_json(format!("{{{}}}", entries.join(",")).as_bytes()).unwrap()
    }

    #[test]
    fn test_from_json_and_lookup() {
        let palette = Palette::from_json(br##"{"red": {"550": "#c52f21"}}"##).unwrap();
        assert_eq!(palette.color("red", "550").unwrap(), "#c52f21");
        assert!(palette.color("red", "500").is_err());
    }

    #[test]
    fn test_missing_shade() {
        let palette = Palette::from_json(br##"{"red": {"550": "#c52f21"}}"##).unwrap();
        let err = palette.color("red", "100").unwrap_err();
        assert!(matches!(
            err,
            ContentError::MissingShade { ref color, ref shade } if color == "red" && shade == "100"
        ));
        assert!(palette.color("blue", "550").is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = Palette::from_json(b"not json").unwrap_err();
        assert!(matches!(err, ContentError::Palette(_)));
    }

    #[test]
    fn test_color_picker() {
        let picker = color_picker(&full_palette()).unwrap();
        assert_eq!(picker.get_attr("class"), Some("color-picker"));

        let header = picker.child_elements().next().unwrap();
        assert_eq!(header.get_attr("class"), Some("grid"));
        assert_eq!(header.child_elements().count(), 20);

        let first = header.child_elements().next().unwrap();
        assert_eq!(first.get_attr("style"), Some("background: #000000"));
        assert_eq!(first.get_attr("title"), Some("red-550"));
    }

    #[test]
    fn test_color_picker_fails_on_incomplete_palette() {
        let palette = Palette::from_json(br##"{"red": {"550": "#c52f21"}}"##).unwrap();
        assert!(matches!(
            color_picker(&palette),
            Err(ContentError::MissingShade { .. })
        ));
    }
}
