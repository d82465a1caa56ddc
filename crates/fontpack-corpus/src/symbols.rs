//! Frequency counting and symbol-code allocation
//!
//! The firmware addresses glyphs with a single byte, so every character
//! appearing anywhere in the corpus must be assigned one of 254 usable
//! codes. Two codes are hard-reserved (0x00 null terminator, 0x01
//! newline), the ten decimal digits always sit at 0x02..=0x0B so numeric
//! rendering can index them directly, and everything else is handed out
//! in descending frequency order.

use crate::error::{CorpusError, Result};
use crate::normalize::normalize;
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Code reserved for the null terminator; never assigned to a symbol.
pub const CODE_NULL: u8 = 0x00;
/// Code reserved for the canonical newline.
pub const CODE_NEWLINE: u8 = 0x01;
/// First code handed out to a real glyph (the digit '0').
pub const CODE_FIRST_SYMBOL: u8 = 0x02;
/// Usable code space once the two reserved codes are taken out.
pub const MAX_SYMBOLS: usize = 254;

const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Per-character occurrence counts over a normalized corpus.
///
/// Every occurrence counts, not per-entry distinct; the canonical
/// newline is skipped because its code is forced, not earned.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: BTreeMap<char, u64>,
}

impl FrequencyTable {
    /// Count every character of every corpus entry.
    pub fn tally<'a>(corpus: impl IntoIterator<Item = &'a str>) -> Self {
        let mut counts = BTreeMap::new();
        for entry in corpus {
            for c in normalize(entry).chars() {
                if c == '\n' {
                    continue;
                }
                *counts.entry(c).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Occurrence count for one character.
    pub fn count(&self, c: char) -> u64 {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    /// Characters observed in the corpus, in no particular order.
    pub fn observed(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }
}

/// The bijective character ↔ symbol-code table for one build.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    codes: BTreeMap<char, u8>,
    /// Glyph emission order: digits first, then allocation order.
    /// `order[i]` holds code `CODE_FIRST_SYMBOL + i`.
    order: Vec<char>,
}

impl SymbolTable {
    /// Allocate symbol codes from a frequency table.
    ///
    /// Digits claim 0x02..=0x0B unconditionally; the remaining observed
    /// characters are sorted by count descending, ties broken by code
    /// point ascending, and assigned consecutively from 0x0C. Fails when
    /// the distinct-symbol total (forced digits included) exceeds the
    /// 254-code space.
    pub fn allocate(freqs: &FrequencyTable) -> Result<Self> {
        let mut others: Vec<(char, u64)> = freqs
            .observed()
            .filter(|&(c, _)| !c.is_ascii_digit())
            .collect();
        others.sort_by_key(|&(c, n)| (Reverse(n), c));

        let total = DIGITS.len() + others.len();
        if total > MAX_SYMBOLS {
            return Err(CorpusError::TooManySymbols(total));
        }

        let mut order = Vec::with_capacity(total);
        order.extend(DIGITS);
        order.extend(others.iter().map(|&(c, _)| c));

        let mut codes = BTreeMap::new();
        codes.insert('\n', CODE_NEWLINE);
        for (i, &c) in order.iter().enumerate() {
            codes.insert(c, CODE_FIRST_SYMBOL + i as u8);
        }

        Ok(Self { codes, order })
    }

    /// The code assigned to a character, if it has one.
    pub fn code_for(&self, c: char) -> Option<u8> {
        self.codes.get(&c).copied()
    }

    /// The character a code maps back to. 0x00 maps to nothing.
    pub fn char_for(&self, code: u8) -> Option<char> {
        if code == CODE_NEWLINE {
            return Some('\n');
        }
        let index = code.checked_sub(CODE_FIRST_SYMBOL)? as usize;
        self.order.get(index).copied()
    }

    /// Every allocated symbol in glyph emission order (digits first,
    /// then allocation order). The newline has no glyph and is absent.
    pub fn symbols(&self) -> &[char] {
        &self.order
    }

    /// Emission-ordered (character, code) pairs.
    pub fn assignments(&self) -> impl Iterator<Item = (char, u8)> + '_ {
        self.order
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, CODE_FIRST_SYMBOL + i as u8))
    }

    /// Number of allocated symbols, forced digits included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True only for an impossible empty allocation.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
