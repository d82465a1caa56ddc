//! Fontpack translation corpus handling
//!
//! This crate loads one language's translation data plus the schema that
//! fixes traversal order, flattens them into a single ordered corpus, and
//! allocates single-byte symbol codes to every character by frequency.
//!
//! # Pipeline position
//!
//! - **Collect**: schema-ordered flattening of every translatable string
//! - **Tally**: per-character occurrence counts over the normalized corpus
//! - **Allocate**: the bijective character ↔ symbol-code table
//!
//! # Example
//!
//! ```
//! use fontpack_corpus::{FrequencyTable, SymbolTable};
//!
//! let freqs = FrequencyTable::tally(["A", "B", "A", "0"]);
//! let table = SymbolTable::allocate(&freqs).unwrap();
//!
//! assert_eq!(table.code_for('0'), Some(0x02));
//! assert_eq!(table.code_for('A'), Some(0x0C));
//! assert_eq!(table.code_for('B'), Some(0x0D));
//! ```

pub mod collect;
pub mod error;
pub mod normalize;
pub mod symbols;
pub mod translation;

pub use collect::*;
pub use error::*;
pub use normalize::*;
pub use symbols::*;
pub use translation::*;
