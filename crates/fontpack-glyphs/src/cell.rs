//! Fixed glyph cells and their byte packing
//!
//! The display driver consumes glyphs in a column-major packed format: a
//! cell is split into 8-row blocks, each block stores one byte per column
//! left to right, and bit 0 of a byte is the topmost pixel of its block.
//! The large 12×16 cell has two blocks (24 bytes), the small 6×8 cell a
//! single block (6 bytes).

/// Large cell width in pixels
pub const LARGE_WIDTH: usize = 12;
/// Large cell height in pixels
pub const LARGE_HEIGHT: usize = 16;
/// Packed size of a large cell
pub const LARGE_BYTES: usize = 24;

/// Small cell width in pixels
pub const SMALL_WIDTH: usize = 6;
/// Small cell height in pixels
pub const SMALL_HEIGHT: usize = 8;
/// Packed size of a small cell
pub const SMALL_BYTES: usize = 6;

/// A packed 12×16 glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LargeCell([u8; LARGE_BYTES]);

impl LargeCell {
    /// Wrap already-packed bytes.
    pub fn from_bytes(bytes: [u8; LARGE_BYTES]) -> Self {
        Self(bytes)
    }

    /// Pack a cell from a pixel predicate over (x, y), origin top-left.
    pub fn from_pixels(mut pixel: impl FnMut(usize, usize) -> bool) -> Self {
        let mut bytes = [0u8; LARGE_BYTES];
        for block in 0..2 {
            for col in 0..LARGE_WIDTH {
                let mut b = 0u8;
                for row in 0..8 {
                    if pixel(col, block * 8 + row) {
                        b |= 1 << row;
                    }
                }
                bytes[block * LARGE_WIDTH + col] = b;
            }
        }
        Self(bytes)
    }

    /// The packed bytes, top block first.
    pub fn bytes(&self) -> &[u8; LARGE_BYTES] {
        &self.0
    }

    /// Decode one pixel, origin top-left.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        let byte = self.0[(y / 8) * LARGE_WIDTH + x];
        byte & (1 << (y % 8)) != 0
    }
}

/// A packed 6×8 glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmallCell([u8; SMALL_BYTES]);

impl SmallCell {
    /// Wrap already-packed bytes.
    pub fn from_bytes(bytes: [u8; SMALL_BYTES]) -> Self {
        Self(bytes)
    }

    /// Pack a cell from a pixel predicate over (x, y), origin top-left.
    pub fn from_pixels(mut pixel: impl FnMut(usize, usize) -> bool) -> Self {
        let mut bytes = [0u8; SMALL_BYTES];
        for col in 0..SMALL_WIDTH {
            let mut b = 0u8;
            for row in 0..SMALL_HEIGHT {
                if pixel(col, row) {
                    b |= 1 << row;
                }
            }
            bytes[col] = b;
        }
        Self(bytes)
    }

    /// The small-font replacement raster, an inverted question mark.
    ///
    /// Used for symbols pulled from the fallback font, which carries no
    /// small-size artwork.
    pub fn replacement() -> Self {
        Self([0xFD, 0xFE, 0xAE, 0xF6, 0xF9, 0xFF])
    }

    /// The packed bytes, one per column.
    pub fn bytes(&self) -> &[u8; SMALL_BYTES] {
        &self.0
    }

    /// Decode one pixel, origin top-left.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.0[x] & (1 << y) != 0
    }
}
