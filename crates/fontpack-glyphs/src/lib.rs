//! Fontpack glyph handling
//!
//! Everything the display driver sees is one of two fixed pixel cells:
//! 12×16 for the large font, 6×8 for the small one. This crate owns the
//! cell packing convention, the built-in artwork for printable ASCII,
//! the fallback bitmap-font source for everything else (CJK ideographs
//! in practice), and the resolver that picks between them and resamples
//! fallback glyphs into the fixed cell.
//!
//! # Example
//!
//! ```
//! use fontpack_glyphs::{FontTables, GlyphResolver, GlyphSource, Resolution, SourceGlyph};
//!
//! struct Empty;
//! impl GlyphSource for Empty {
//!     fn glyph(&self, _c: char) -> Option<SourceGlyph> {
//!         None
//!     }
//! }
//!
//! let mut resolver = GlyphResolver::new(FontTables::builtin(), Empty);
//! let (large, small, resolution) = resolver.resolve('A').unwrap();
//! assert_eq!(resolution, Resolution::FromStaticTable);
//! assert_eq!(large.bytes().len(), 24);
//! assert_eq!(small.bytes().len(), 6);
//! ```

pub mod cell;
pub mod error;
pub mod resolver;
pub mod source;
pub mod table;

pub use cell::*;
pub use error::*;
pub use resolver::*;
pub use source::*;
pub use table::*;
