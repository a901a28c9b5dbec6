// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pairwise edit distance with an early-exit optimization.
//!
//! The trie never calls these. They exist for the linear-scan baseline
//! ([`crate::PrefixTrie::linear_match`]), which the `verify` command and the
//! benchmarks compare the trie against.
//!
//! `|len(a) - len(b)|` is a lower bound on edit distance, so the bounded
//! check rejects on length alone before touching the DP.

/// Runs the two-row DP of `a` against `b`, handing the minimum of each
/// finished row to `on_row`. Returning `false` from `on_row` stops the scan and
/// yields `None`; otherwise the final distance comes back.
fn scan_rows(a: &str, b: &str, mut on_row: impl FnMut(usize) -> bool) -> Option<usize> {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        let mut smallest = row[0];

        for (j, &bc) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + usize::from(ac != bc));
            diagonal = above;
            smallest = smallest.min(row[j + 1]);
        }

        if !on_row(smallest) {
            return None;
        }
    }

    Some(row[b.len()])
}

/// Levenshtein distance between `a` and `b`, counted in characters.
pub fn levenshtein(a: &str, b: &str) -> usize {
    // Never stops early, so the scan always yields a distance
    scan_rows(a, b, |_| true).unwrap_or_default()
}

/// Are these strings within `max` edits of each other?
///
/// Gives up as soon as the length gap or a row minimum exceeds `max`. Row
/// minima never decrease, so nothing below such a row can recover.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    if a.chars().count().abs_diff(b.chars().count()) > max {
        return false;
    }
    scan_rows(a, b, |smallest| smallest <= max).is_some_and(|d| d <= max)
}
