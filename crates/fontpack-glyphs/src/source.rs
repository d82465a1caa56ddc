//! The fallback glyph source
//!
//! Symbols without built-in artwork (CJK ideographs in practice) are
//! pulled from an external pre-rasterized bitmap font, keyed by code
//! point. The deployment uses WenQuanYi Bitmap Song 9pt in BDF form.

use crate::error::{GlyphError, Result};
use std::io::Read;
use std::path::Path;

/// A raw glyph as the external font stores it.
///
/// `rows` holds one word per raster row, bottom row first, with the
/// least significant used bit being the rightmost pixel. The bounding
/// box (`left`, `bottom`) positions the raster inside the font's
/// notional cell. [`SourceGlyph::pixel`] hides both flips and addresses
/// the raster top-down, left-to-right.
#[derive(Debug, Clone)]
pub struct SourceGlyph {
    pub left: i32,
    pub bottom: i32,
    pub width: u32,
    pub height: u32,
    rows: Vec<u64>,
}

/// Widest raster a row word can hold.
const MAX_SOURCE_WIDTH: u32 = u64::BITS;

impl SourceGlyph {
    /// Build a glyph from its bounding box and bottom-up row data.
    ///
    /// `width` must not exceed 64; wider fonts are rejected at load time.
    pub fn new(left: i32, bottom: i32, width: u32, height: u32, rows: Vec<u64>) -> Self {
        debug_assert_eq!(rows.len(), height as usize);
        debug_assert!(width <= MAX_SOURCE_WIDTH);
        Self {
            left,
            bottom,
            width,
            height,
            rows,
        }
    }

    /// Pixel at (x, y) with the origin at the raster's top-left.
    ///
    /// Coordinates outside the bounding box read as unset.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let row = self.rows[(self.height - 1 - y) as usize];
        row & (1 << (self.width - 1 - x)) != 0
    }
}

/// Read-only glyph lookup by code point.
///
/// The resolver takes any implementation, so tests can substitute a
/// hand-built source for the real font file.
pub trait GlyphSource {
    fn glyph(&self, c: char) -> Option<SourceGlyph>;
}

/// A [`GlyphSource`] over a parsed BDF font.
#[derive(Debug)]
pub struct BdfGlyphSource {
    font: bdf::Font,
}

impl BdfGlyphSource {
    /// Load a BDF font from a file.
    pub fn open(path: &Path) -> Result<Self> {
        let font = bdf::open(path).map_err(|e| GlyphError::FontLoad(e.to_string()))?;
        Self::checked(font)
    }

    /// Parse a BDF font from any reader.
    pub fn read(stream: impl Read) -> Result<Self> {
        let font = bdf::read(stream).map_err(|e| GlyphError::FontLoad(e.to_string()))?;
        Self::checked(font)
    }

    fn checked(font: bdf::Font) -> Result<Self> {
        for (c, glyph) in font.glyphs() {
            if glyph.width() > MAX_SOURCE_WIDTH {
                return Err(GlyphError::FontLoad(format!(
                    "glyph '{c}' is {} pixels wide, at most {MAX_SOURCE_WIDTH} supported",
                    glyph.width()
                )));
            }
        }
        Ok(Self { font })
    }
}

impl GlyphSource for BdfGlyphSource {
    fn glyph(&self, c: char) -> Option<SourceGlyph> {
        let glyph = self.font.glyphs().get(&c)?;
        let bounds = glyph.bounds();
        let (width, height) = (glyph.width(), glyph.height());
        // the bdf crate stores pixels top-down; repack bottom-up
        let mut rows = vec![0u64; height as usize];
        for y in 0..height {
            for x in 0..width {
                if glyph.get(x, y) {
                    rows[(height - 1 - y) as usize] |= 1 << (width - 1 - x);
                }
            }
        }
        Some(SourceGlyph::new(bounds.x, bounds.y, width, height, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_addressing_flips() {
        // 3 wide, 2 tall; bottom row 0b101, top row 0b010
        let glyph = SourceGlyph::new(0, 0, 3, 2, vec![0b101, 0b010]);
        // top row: only the middle pixel
        assert!(!glyph.pixel(0, 0));
        assert!(glyph.pixel(1, 0));
        assert!(!glyph.pixel(2, 0));
        // bottom row: the outer pixels
        assert!(glyph.pixel(0, 1));
        assert!(!glyph.pixel(1, 1));
        assert!(glyph.pixel(2, 1));
    }

    #[test]
    fn test_out_of_box_reads_unset() {
        let glyph = SourceGlyph::new(0, 0, 2, 2, vec![0b11, 0b11]);
        assert!(!glyph.pixel(2, 0));
        assert!(!glyph.pixel(0, 2));
        assert!(!glyph.pixel(7, 9));
    }

    #[test]
    fn test_bdf_round_trip() {
        let bdf_data = "\
STARTFONT 2.1
FONT test
SIZE 9 75 75
FONTBOUNDINGBOX 8 8 0 -1
CHARS 1
STARTCHAR uni4E2D
ENCODING 20013
SWIDTH 1000 0
DWIDTH 8 0
BBX 8 3 1 2
BITMAP
FF
81
FF
ENDCHAR
ENDFONT
";
        let source = BdfGlyphSource::read(bdf_data.as_bytes()).unwrap();
        let glyph = source.glyph('中').expect("glyph present");
        assert_eq!((glyph.left, glyph.bottom), (1, 2));
        assert_eq!((glyph.width, glyph.height), (8, 3));
        // top row fully set, middle row only the edges
        assert!(glyph.pixel(0, 0) && glyph.pixel(7, 0));
        assert!(glyph.pixel(0, 1) && !glyph.pixel(3, 1) && glyph.pixel(7, 1));
        assert!(glyph.pixel(0, 2) && glyph.pixel(7, 2));
        assert!(source.glyph('外').is_none());
    }

    #[test]
    fn test_overwide_glyph_rejected_at_load() {
        // 65 pixels wide: one more than a row word can carry
        let row = "FF".repeat(8) + "80";
        let bdf_data = format!(
            "\
STARTFONT 2.1
FONT test
SIZE 9 75 75
FONTBOUNDINGBOX 65 1 0 0
CHARS 1
STARTCHAR banner
ENCODING 65
SWIDTH 1000 0
DWIDTH 65 0
BBX 65 1 0 0
BITMAP
{row}
ENDCHAR
ENDFONT
"
        );
        let err = BdfGlyphSource::read(bdf_data.as_bytes()).unwrap_err();
        match err {
            GlyphError::FontLoad(msg) => assert!(msg.contains("65 pixels wide"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
