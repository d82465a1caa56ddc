//! Text normalization
//!
//! Translation strings arrive with line breaks spelled three different
//! ways: literal two-character `\n` / `\r` escapes, real line feeds, and
//! real carriage returns. Everything downstream (frequency counting and
//! the final encode pass) runs over one canonical form instead.

/// Normalize line endings in one translation string.
///
/// Carriage returns disappear in both spellings; literal `\n` escapes and
/// real line feeds both become the single canonical `'\n'`. Any other
/// backslash passes through untouched. All other characters are preserved.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.peek() {
                Some('r') => {
                    chars.next();
                }
                Some('n') => {
                    chars.next();
                    out.push('\n');
                }
                _ => out.push('\\'),
            },
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}
