// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization shared by indexing and querying.
//!
//! Both sides of a search must agree on what a "word" looks like, otherwise
//! "Dog," in a document never matches "dog" in a query. Everything that goes
//! into the trie and everything that is looked up in it passes through
//! [`normalize`] exactly once.

#[cfg(feature = "transliterate")]
use unicode_normalization::UnicodeNormalization;

/// Stand-in for characters outside ASCII.
pub const PLACEHOLDER: char = '?';

/// Normalize text for search: lowercase, strip ASCII punctuation, and force ASCII.
///
/// - "Hello, World!" → "hello world"
/// - "don't" → "dont"
/// - "café" → "caf?" (or "cafe" with the `transliterate` feature)
///
/// Whitespace is left alone. Splitting into words is [`tokenize`]'s job.
///
/// The output only ever contains ASCII, so the trie can key children by byte.
pub fn normalize(value: &str) -> String {
    let lowered = value.to_lowercase();

    #[cfg(feature = "transliterate")]
    let lowered: String = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();

    lowered
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .map(|c| if c.is_ascii() { c } else { PLACEHOLDER })
        .collect()
}

/// Split normalized text into words.
pub fn tokenize(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}

/// Combining marks left behind by NFD (accents, macrons, dots below).
#[cfg(feature = "transliterate")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
