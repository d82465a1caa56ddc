//! Glyph resolution and resampling
//!
//! For every allocated symbol the resolver produces the (large, small)
//! cell pair. Built-in symbols come straight from the static table; for
//! anything else the fallback font is cropped and repositioned into the
//! 12×16 cell, and the small variant becomes the replacement raster.

use crate::cell::{LargeCell, SmallCell, LARGE_HEIGHT};
use crate::error::{GlyphError, Result};
use crate::source::{GlyphSource, SourceGlyph};
use crate::table::FontTables;
use std::collections::HashSet;
use tracing::debug;

/// How a symbol's artwork was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Pre-authored artwork from the built-in table
    FromStaticTable,
    /// Resampled out of the fallback bitmap font
    FromDynamicSource,
}

/// Vertical bias applied when placing a fallback glyph's baseline in the
/// 16-row cell. Tuned for WenQuanYi Bitmap Song 9pt; changing it moves
/// every resampled glyph.
const BASELINE_LIFT: i32 = 3;

/// Resolves symbols to cell pairs, memoizing resampled fallback glyphs.
pub struct GlyphResolver<S> {
    tables: FontTables,
    source: S,
    /// Symbols that entered the table through the fallback font
    dynamic: HashSet<char>,
}

impl<S: GlyphSource> GlyphResolver<S> {
    /// Build a resolver over a font table view and a fallback source.
    pub fn new(tables: FontTables, source: S) -> Self {
        Self {
            tables,
            source,
            dynamic: HashSet::new(),
        }
    }

    /// Resolve one symbol to its (large, small) cell pair.
    ///
    /// A symbol absent from both the table and the fallback font is
    /// fatal, as is a built-in symbol without small-font artwork. A
    /// fallback symbol always gets the replacement small cell. Resampled
    /// glyphs are memoized, so resolving the same symbol twice in one
    /// run yields byte-identical cells.
    pub fn resolve(&mut self, c: char) -> Result<(LargeCell, SmallCell, Resolution)> {
        if let Some(large) = self.tables.large(c).cloned() {
            let resolution = if self.dynamic.contains(&c) {
                Resolution::FromDynamicSource
            } else {
                Resolution::FromStaticTable
            };
            let small = self
                .tables
                .small(c)
                .cloned()
                .ok_or(GlyphError::MissingSmallGlyph(c))?;
            return Ok((large, small, resolution));
        }

        let glyph = self.source.glyph(c).ok_or(GlyphError::MissingGlyph(c))?;
        debug!("resampling '{c}' from the fallback font");
        let large = resample(&glyph);
        let small = SmallCell::replacement();
        self.tables.insert(c, large.clone(), small.clone());
        self.dynamic.insert(c);
        Ok((large, small, Resolution::FromDynamicSource))
    }
}

/// Crop and reposition a fallback glyph into the 12×16 cell.
///
/// Destination pixel (x, y) maps to source pixel
/// (x − left, y − (16 − height − bottom − 3)); anything landing outside
/// the source bounding box stays unset.
fn resample(glyph: &SourceGlyph) -> LargeCell {
    let y_shift = LARGE_HEIGHT as i32 - glyph.height as i32 - glyph.bottom - BASELINE_LIFT;
    LargeCell::from_pixels(|x, y| {
        let sx = x as i32 - glyph.left;
        let sy = y as i32 - y_shift;
        if sx < 0 || sy < 0 {
            false
        } else {
            glyph.pixel(sx as u32, sy as u32)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeSource {
        glyphs: HashMap<char, SourceGlyph>,
    }

    impl FakeSource {
        fn new(glyphs: impl IntoIterator<Item = (char, SourceGlyph)>) -> Self {
            Self {
                glyphs: glyphs.into_iter().collect(),
            }
        }
    }

    impl GlyphSource for FakeSource {
        fn glyph(&self, c: char) -> Option<SourceGlyph> {
            self.glyphs.get(&c).cloned()
        }
    }

    #[test]
    fn test_static_symbol_resolves_from_table() {
        let mut resolver = GlyphResolver::new(FontTables::builtin(), FakeSource::new([]));
        let (large, _, resolution) = resolver.resolve('A').unwrap();
        assert_eq!(resolution, Resolution::FromStaticTable);
        assert_eq!(large, FontTables::builtin().large('A').cloned().unwrap());
    }

    #[test]
    fn test_missing_everywhere_is_fatal() {
        let mut resolver = GlyphResolver::new(FontTables::builtin(), FakeSource::new([]));
        let err = resolver.resolve('中').unwrap_err();
        assert!(matches!(err, GlyphError::MissingGlyph('中')));
    }

    #[test]
    fn test_large_only_symbol_is_fatal() {
        // large artwork without a small counterpart never falls through
        // to the fallback font
        let mut tables = FontTables::empty();
        tables.insert_large_only('A', LargeCell::from_bytes([0xFF; 24]));
        let mut resolver = GlyphResolver::new(tables, FakeSource::new([]));
        let err = resolver.resolve('A').unwrap_err();
        assert!(matches!(err, GlyphError::MissingSmallGlyph('A')));
    }

    #[test]
    fn test_fallback_gets_replacement_small_cell() {
        // full-height bar, one column wide, flush with the cell
        let glyph = SourceGlyph::new(0, 0, 1, 12, vec![1; 12]);
        let mut resolver =
            GlyphResolver::new(FontTables::builtin(), FakeSource::new([('中', glyph)]));
        let (_, small, resolution) = resolver.resolve('中').unwrap();
        assert_eq!(resolution, Resolution::FromDynamicSource);
        assert_eq!(small, SmallCell::replacement());
    }

    #[test]
    fn test_resample_baseline_placement() {
        // 2x2 block at bbox origin: y_shift = 16 - 2 - 0 - 3 = 11,
        // so the block lands at rows 11..13, columns 0..2
        let glyph = SourceGlyph::new(0, 0, 2, 2, vec![0b11, 0b11]);
        let cell = resample(&glyph);
        for x in 0..12 {
            for y in 0..16 {
                let expected = x < 2 && (11..13).contains(&y);
                assert_eq!(cell.pixel(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_resample_honours_left_and_bottom_offsets() {
        // left=3, bottom=1: y_shift = 16 - 1 - 1 - 3 = 11, x starts at 3
        let glyph = SourceGlyph::new(3, 1, 1, 1, vec![1]);
        let cell = resample(&glyph);
        for x in 0..12 {
            for y in 0..16 {
                assert_eq!(cell.pixel(x, y), (x, y) == (3, 11), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_resample_full_cell_source() {
        // a source that exactly fills 12x16 with bottom=-3 cancelling the
        // baseline lift; every destination pixel reads in range
        let glyph = SourceGlyph::new(0, -3, 12, 16, vec![0xFFF; 16]);
        let cell = resample(&glyph);
        for x in 0..12 {
            for y in 0..16 {
                assert!(cell.pixel(x, y), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_resample_small_source_leaves_rest_unset() {
        let glyph = SourceGlyph::new(5, 2, 3, 3, vec![0b111, 0b101, 0b111]);
        let cell = resample(&glyph);
        let set: usize = (0..12)
            .map(|x| (0..16).filter(|&y| cell.pixel(x, y)).count())
            .sum();
        assert_eq!(set, 8);
    }

    #[test]
    fn test_resolution_idempotent() {
        let glyph = SourceGlyph::new(0, 0, 4, 4, vec![0b1001, 0b0110, 0b0110, 0b1001]);
        let mut resolver =
            GlyphResolver::new(FontTables::builtin(), FakeSource::new([('中', glyph)]));
        let (large_a, small_a, res_a) = resolver.resolve('中').unwrap();
        let (large_b, small_b, res_b) = resolver.resolve('中').unwrap();
        assert_eq!(large_a, large_b);
        assert_eq!(small_a, small_b);
        assert_eq!(res_a, res_b);
    }
}
