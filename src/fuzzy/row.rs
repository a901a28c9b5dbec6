// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One row of the edit-distance matrix, computed from its parent row.
//!
//! Walking down the trie appends one character to the prefix, which is exactly
//! one more row of the Wagner-Fischer table. Entry `i` of the row at depth `d`
//! is the distance between the `d`-character prefix and the first `i` query
//! characters.
//!
//! # Banding
//!
//! Any cell with `|d - i| > n` costs more than `n` edits (the length gap alone
//! forces that many insertions or deletions). So only the band
//! `i ∈ [d - n - 1, d + n + 1)` is computed and everything else holds the
//! sentinel `n + 1`, meaning "over budget". Entries at or below `n` are exact;
//! entries above `n` are only known to be above `n`.
//!
//! Entry 0 is the pure-deletion cost `d` and is always exact.

/// Row for the root (empty prefix): `[0, 1, ..., query_len]`.
pub fn identity_row(query_len: usize) -> Vec<usize> {
    (0..=query_len).collect()
}

/// Row for a node at `depth` reached over `edge`, given the parent's row.
///
/// `parent` must have `query.len() + 1` entries and belong to the node at
/// `depth - 1`.
pub fn next_row(parent: &[usize], query: &[u8], edge: u8, depth: usize, max_distance: usize) -> Vec<usize> {
    debug_assert_eq!(parent.len(), query.len() + 1);
    debug_assert!(depth > 0);

    let sentinel = max_distance.saturating_add(1);
    let mut row = vec![sentinel; query.len() + 1];
    row[0] = depth;

    let start = depth.saturating_sub(max_distance.saturating_add(1));
    let end = query.len().min(depth.saturating_add(max_distance).saturating_add(1));

    for i in start..end {
        row[i + 1] = if query[i] == edge {
            parent[i]
        } else {
            1 + parent[i].min(parent[i + 1]).min(row[i])
        };
    }

    row
}

/// Smallest entry of a row: the best any extension of this prefix can do.
pub fn row_min(row: &[usize]) -> usize {
    row.iter().copied().min().unwrap_or(usize::MAX)
}
