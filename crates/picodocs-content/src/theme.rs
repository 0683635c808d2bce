//! Light/dark theme switcher.
//!
//! The switcher button posts to `/toggle_theme` and replaces itself with the
//! fragment built here. The button's `name` carries the theme that the next
//! click applies, formatted as `theme-toggle(<theme>)`; htmx forwards it in
//! the `HX-Trigger-Name` header.

use std::fmt;

use picodocs_markup::tags::{article, button, script};
use picodocs_markup::{Element, Node};

/// Route the switcher posts to.
pub const TOGGLE_THEME_ROUTE: &str = "/toggle_theme";

/// Color scheme understood by Pico CSS.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    /// Light scheme.
    Light,
    /// Dark scheme.
    Dark,
}

impl Theme {
    /// Parse an exact theme name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Theme name as used in `data-theme`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract the parenthesized value of a `theme-toggle(<theme>)` trigger name.
///
/// Takes the text after the last `(` and strips `)` from both ends. Values
/// without parentheses are returned with only the stripping applied.
///
/// ```
/// use picodocs_content::theme::trigger_value;
///
/// assert_eq!(trigger_value("theme-toggle(dark)"), "dark");
/// assert_eq!(trigger_value(""), "");
/// ```
#[must_use]
pub fn trigger_value(trigger_name: &str) -> &str {
    trigger_name
        .rsplit('(')
        .next()
        .unwrap_or_default()
        .trim_matches(')')
}

/// Outcome of one click on the theme switcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeToggle {
    /// Theme named by the clicked button, applied to the document.
    /// `None` when the trigger was missing or named something else.
    pub applied: Option<Theme>,
    /// Theme the replacement button will apply on the next click.
    pub next: Theme,
}

impl ThemeToggle {
    /// Compute the toggle from the `HX-Trigger-Name` header value.
    ///
    /// The flip rule is "light if currently dark, else dark", so a missing or
    /// unrecognized value flips to dark.
    #[must_use]
    pub fn from_trigger_name(trigger_name: Option<&str>) -> Self {
        let applied = trigger_name.map(trigger_value).and_then(Theme::from_name);
        let next = if applied == Some(Theme::Dark) {
            Theme::Light
        } else {
            Theme::Dark
        };
        Self { applied, next }
    }

    /// Build the replacement fragment: the new switcher plus the script that
    /// sets `data-theme` on the document element.
    #[must_use]
    pub fn fragment(&self) -> Node {
        let applied = self.applied.map_or("", Theme::as_str);
        let switcher = switcher(
            toggle_button()
                .attr("name", format!("theme-toggle({})", self.next))
                .child(format!("Make {}!", self.next)),
        );
        let script = script().child(format!(
            "document.documentElement.setAttribute('data-theme', '{applied}');"
        ));
        (switcher, script).into()
    }
}

/// The initial theme switcher shown on the page.
#[must_use]
pub fn theme_switch() -> Element {
    switcher(toggle_button().child("Toggle theme"))
}

fn switcher(button: Element) -> Element {
    article()
        .id("theme-switcher")
        .attr("aria-label", "Theme switcher")
        .child(button)
}

fn toggle_button() -> Element {
    button()
        .class("contrast")
        .attr("hx-post", TOGGLE_THEME_ROUTE)
        .attr("hx-swap", "outerHTML")
        .attr("hx-target", "#theme-switcher")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_trigger_value() {
        assert_eq!(trigger_value("theme-toggle(dark)"), "dark");
        assert_eq!(trigger_value("theme-toggle(light)"), "light");
        assert_eq!(trigger_value("a(b(light))"), "light");
        assert_eq!(trigger_value("plain"), "plain");
        assert_eq!(trigger_value(""), "");
    }

    #[test]
    fn test_dark_flips_to_light() {
        let toggle = ThemeToggle::from_trigger_name(Some("theme-toggle(dark)"));
        assert_eq!(toggle.next, Theme::Light);
        assert_eq!(toggle.applied, Some(Theme::Dark));
    }

    #[test]
    fn test_light_flips_to_dark() {
        let toggle = ThemeToggle::from_trigger_name(Some("theme-toggle(light)"));
        assert_eq!(toggle.next, Theme::Dark);
        assert_eq!(toggle.applied, Some(Theme::Light));
    }

    #[test]
    fn test_missing_or_unknown_flips_to_dark() {
        for value in [None, Some(""), Some("theme-toggle(sepia)"), Some("garbage")] {
            let toggle = ThemeToggle::from_trigger_name(value);
            assert_eq!(toggle.next, Theme::Dark, "value: {value:?}");
            assert_eq!(toggle.applied, None, "value: {value:?}");
        }
    }

    #[test]
    fn test_fragment_markup() {
        let html = ThemeToggle::from_trigger_name(Some("theme-toggle(dark)"))
            .fragment()
            .render()
            .unwrap();
        assert_eq!(
            html,
            concat!(
                r##"<article id="theme-switcher" aria-label="Theme switcher">"##,
                r##"<button class="contrast" hx-post="/toggle_theme" hx-swap="outerHTML" hx-target="#theme-switcher" name="theme-toggle(light)">Make light!</button>"##,
                r##"</article>"##,
                r##"<script>document.documentElement.setAttribute('data-theme', 'dark');</script>"##,
            )
        );
    }

    #[test]
    fn test_fragment_never_echoes_unknown_values() {
        let html = ThemeToggle::from_trigger_name(Some("x(');alert(1);//)"))
            .fragment()
            .render()
            .unwrap();
        assert!(html.contains("setAttribute('data-theme', '');"));
        assert!(!html.contains("alert"));
    }

    #[test]
    fn test_initial_switch() {
        let html = theme_switch().render().unwrap();
        assert!(html.starts_with(r#"<article id="theme-switcher" aria-label="Theme switcher"><button class="contrast""#));
        assert!(html.contains(">Toggle theme</button>"));
        assert!(!html.contains("name="));
    }
}
