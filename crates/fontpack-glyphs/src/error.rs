//! Error types for glyph resolution

use thiserror::Error;

/// Error type for glyph operations
#[derive(Debug, Error)]
pub enum GlyphError {
    /// Neither the built-in table nor the fallback font has artwork
    #[error("missing large font element for '{0}'")]
    MissingGlyph(char),

    /// A built-in symbol lacks its small-font variant
    #[error("missing small font element for '{0}'")]
    MissingSmallGlyph(char),

    /// The fallback font file could not be loaded
    #[error("failed to load fallback font: {0}")]
    FontLoad(String),
}

/// Result type for glyph operations
pub type Result<T> = std::result::Result<T, GlyphError>;
