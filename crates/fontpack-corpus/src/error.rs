//! Error types for corpus handling

use thiserror::Error;

/// Error type for corpus operations
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Translation or schema file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// Translation or schema file could not be parsed
    #[error("failed to decode {path}: {message}")]
    Parse { path: String, message: String },

    /// Language code declared in the JSON disagrees with the file name
    #[error("invalid languageCode {declared} in file {file}")]
    LanguageCodeMismatch { file: String, declared: String },

    /// An id named by the schema is missing from the language data
    #[error("missing {category} entry for id {id}")]
    MissingEntry { category: &'static str, id: String },

    /// More distinct symbols than the 8-bit code space can hold
    #[error("too many used symbols for this version (total {0})")]
    TooManySymbols(usize),
}

/// Result type for corpus operations
pub type Result<T> = std::result::Result<T, CorpusError>;
