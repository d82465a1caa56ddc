//! String encoding through the symbol table

use fontpack_corpus::{normalize, SymbolTable};
use std::fmt::Write;
use tracing::warn;

/// Re-express a string as escaped symbol-code bytes.
///
/// The text is normalized first, so literal `\n` escapes and real line
/// feeds both come out as the reserved newline code 0x01. Every other
/// character maps through the symbol table to an uppercase `\xNN`
/// escape. A character with no allocated code points at an upstream
/// defect; it is logged and dropped from this string.
pub fn encode_string(table: &SymbolTable, text: &str) -> String {
    let normalized = normalize(text);
    let mut out = String::with_capacity(normalized.len() * 4);
    for c in normalized.chars() {
        match table.code_for(c) {
            Some(code) => {
                let _ = write!(out, "\\x{code:02X}");
            }
            None => warn!("missing font definition for {c:?}"),
        }
    }
    out
}
