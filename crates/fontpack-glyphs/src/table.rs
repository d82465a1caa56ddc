//! The built-in static font table
//!
//! Pre-authored artwork for printable ASCII plus a handful of extras
//! (the degree sign), shipped as a generated data asset and loaded into
//! a mutable in-memory view. The resolver memoizes resampled fallback
//! glyphs into the same view so repeated lookups stay idempotent within
//! one run; nothing persists across runs.

use crate::cell::{LargeCell, SmallCell};
use std::collections::HashMap;

include!("font_data.rs");

/// In-memory view over the glyph artwork for one build.
#[derive(Debug, Clone)]
pub struct FontTables {
    large: HashMap<char, LargeCell>,
    small: HashMap<char, SmallCell>,
}

impl FontTables {
    /// The built-in table, covering printable ASCII 0x20..=0x7E plus
    /// pre-authored extras.
    pub fn builtin() -> Self {
        let large = BUILTIN_12X16
            .iter()
            .map(|&(c, bytes)| (c, LargeCell::from_bytes(bytes)))
            .collect();
        let small = BUILTIN_6X8
            .iter()
            .map(|&(c, bytes)| (c, SmallCell::from_bytes(bytes)))
            .collect();
        Self { large, small }
    }

    /// An empty table, for tests that drive the resolver's fallback path.
    pub fn empty() -> Self {
        Self {
            large: HashMap::new(),
            small: HashMap::new(),
        }
    }

    /// Large-cell artwork for a character, if present.
    pub fn large(&self, c: char) -> Option<&LargeCell> {
        self.large.get(&c)
    }

    /// Small-cell artwork for a character, if present.
    pub fn small(&self, c: char) -> Option<&SmallCell> {
        self.small.get(&c)
    }

    /// Whether the table carries any artwork for a character.
    pub fn contains(&self, c: char) -> bool {
        self.large.contains_key(&c)
    }

    /// Memoize a resolved glyph pair. Resolver-internal.
    pub(crate) fn insert(&mut self, c: char, large: LargeCell, small: SmallCell) {
        self.large.insert(c, large);
        self.small.insert(c, small);
    }

    /// Insert large-cell artwork without a small variant, to exercise
    /// the missing-small-glyph failure path.
    #[cfg(test)]
    pub(crate) fn insert_large_only(&mut self, c: char, large: LargeCell) {
        self.large.insert(c, large);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_printable_ascii() {
        let tables = FontTables::builtin();
        for c in '\u{20}'..='\u{7e}' {
            assert!(tables.large(c).is_some(), "missing large glyph for {c:?}");
            assert!(tables.small(c).is_some(), "missing small glyph for {c:?}");
        }
    }

    #[test]
    fn test_carries_degree_sign() {
        let tables = FontTables::builtin();
        assert!(tables.contains('°'));
        assert!(tables.small('°').is_some());
    }

    #[test]
    fn test_space_is_blank() {
        let tables = FontTables::builtin();
        assert!(tables.large(' ').unwrap().bytes().iter().all(|&b| b == 0));
        assert!(tables.small(' ').unwrap().bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_no_cjk_artwork() {
        let tables = FontTables::builtin();
        assert!(!tables.contains('中'));
    }
}
