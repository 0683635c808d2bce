//! Validated heading level.

use picodocs_markup::Element;

use crate::OutlineError;

/// Heading level in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    /// Lowest level (`h1`).
    pub const MIN: u8 = 1;
    /// Highest level (`h6`).
    pub const MAX: u8 = 6;

    /// Validate a level.
    pub fn new(level: u8) -> Result<Self, OutlineError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(OutlineError::InvalidHeadingLevel(level))
        }
    }

    /// Numeric level.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Level of a section nested directly below this one.
    pub fn deeper(self) -> Result<Self, OutlineError> {
        Self::new(self.0 + 1)
    }

    /// Empty `h{level}` element.
    pub(crate) fn element(self) -> Element {
        Element::new(format!("h{}", self.0))
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = OutlineError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}
