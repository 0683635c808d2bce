//! Anchor resolution across a whole page.

use std::collections::{HashMap, HashSet};

use crate::heading::anchor_for;
use crate::section::Section;

/// How heading anchors are made unique within a page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AnchorStrategy {
    /// Use the title-derived anchor unchanged, even when it repeats.
    Title,
    /// Qualify repeated anchors with the parent anchor (`grid/syntax`), then
    /// number whatever still collides (`syntax-1`).
    #[default]
    Scoped,
}

/// Assigns anchors while a page is being built.
///
/// The resolver lives for one build, so building the same outline twice
/// yields the same anchors.
pub(crate) struct AnchorResolver {
    strategy: AnchorStrategy,
    /// How many headings in the page derive each anchor.
    occurrences: HashMap<String, usize>,
    /// Every anchor handed out so far.
    issued: HashSet<String>,
}

impl AnchorResolver {
    /// Create a resolver for the given top-level sections.
    pub(crate) fn new(strategy: AnchorStrategy, sections: &[Section]) -> Self {
        let mut occurrences = HashMap::new();
        for section in sections {
            count_anchors(section, &mut occurrences);
        }
        Self {
            strategy,
            occurrences,
            issued: HashSet::new(),
        }
    }

    /// Resolve the anchor for a heading whose parent has anchor `parent`.
    pub(crate) fn resolve(&mut self, title: &str, parent: Option<&str>) -> String {
        let anchor = anchor_for(title);
        if self.strategy == AnchorStrategy::Title {
            return anchor;
        }

        let repeated = self.occurrences.get(&anchor).copied().unwrap_or_default() > 1;
        let base = match parent {
            Some(parent) if repeated => format!("{parent}/{anchor}"),
            _ => anchor,
        };

        let id = if self.issued.contains(&base) {
            self.numbered(&base)
        } else {
            base
        };
        self.issued.insert(id.clone());
        id
    }

    /// First `{base}-{n}` that is neither issued nor another heading's own
    /// title anchor.
    fn numbered(&self, base: &str) -> String {
        let (n, id) = (1..)
            .map(|n| (n, format!("{base}-{n}")))
            .find(|(_, id)| !self.issued.contains(id) && !self.occurrences.contains_key(id))
            .unwrap_or_default();
        tracing::debug!(anchor = %base, n, "Numbering repeated heading anchor");
        id
    }
}

fn count_anchors(section: &Section, occurrences: &mut HashMap<String, usize>) {
    *occurrences.entry(anchor_for(section.title())).or_default() += 1;
    for child in section.children() {
        count_anchors(child, occurrences);
    }
}
