//! Reference oracles for differential testing.
//!
//! These are simple, obviously-correct implementations. They serve as ground
//! truth for the banded trie search: no shared rows, no band, no pruning.

use levtrie::{normalize, PrefixTrie, SearchIndex};
use proptest::prelude::*;
use std::collections::HashSet;

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

/// Classic Levenshtein edit distance via dynamic programming.
///
/// Standard Wagner-Fischer. O(nm) time, O(n) space.
pub fn oracle_levenshtein(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two-row DP
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for (i, c1) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, c2) in b.iter().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Every word in the trie, compared one by one against the normalized query.
pub fn oracle_fuzzy_match(trie: &PrefixTrie, query: &str, n: usize) -> HashSet<String> {
    let query = normalize(query);
    trie.words()
        .filter(|word| oracle_levenshtein(word, &query) <= n)
        .map(str::to_string)
        .collect()
}

/// Oracle word matches expanded through the index's postings.
pub fn oracle_index_match(index: &SearchIndex, query: &str, n: usize) -> HashSet<String> {
    oracle_fuzzy_match(index.trie(), query, n)
        .iter()
        .filter_map(|word| index.documents_for(word))
        .flatten()
        .cloned()
        .collect()
}

// =============================================================================
// ORACLE SELF-CHECKS
// =============================================================================

proptest! {
    /// The oracle agrees with an independent implementation.
    #[test]
    fn prop_oracle_matches_strsim(a in "[a-e]{0,10}", b in "[a-e]{0,10}") {
        prop_assert_eq!(oracle_levenshtein(&a, &b), strsim::levenshtein(&a, &b));
    }

    /// Symmetry: d(a, b) = d(b, a)
    #[test]
    fn prop_levenshtein_symmetric(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
        prop_assert_eq!(oracle_levenshtein(&a, &b), oracle_levenshtein(&b, &a));
    }

    /// Triangle inequality: d(a, c) <= d(a, b) + d(b, c)
    #[test]
    fn prop_levenshtein_triangle(
        a in "[a-c]{0,8}",
        b in "[a-c]{0,8}",
        c in "[a-c]{0,8}",
    ) {
        let ab = oracle_levenshtein(&a, &b);
        let bc = oracle_levenshtein(&b, &c);
        let ac = oracle_levenshtein(&a, &c);
        prop_assert!(ac <= ab + bc);
    }

    /// Length bound: |len(a) - len(b)| <= d(a, b) <= max(len(a), len(b))
    #[test]
    fn prop_levenshtein_length_bound(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
        let d = oracle_levenshtein(&a, &b);
        prop_assert!(a.len().abs_diff(b.len()) <= d);
        prop_assert!(d <= a.len().max(b.len()));
    }
}

#[test]
fn test_levenshtein_basic() {
    assert_eq!(oracle_levenshtein("", ""), 0);
    assert_eq!(oracle_levenshtein("abc", ""), 3);
    assert_eq!(oracle_levenshtein("kitten", "sitting"), 3);
    assert_eq!(oracle_levenshtein("olivia", "olivier"), 2);
}
