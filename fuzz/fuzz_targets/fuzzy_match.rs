// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the banded trie walk.
//!
//! The walk prunes subtrees and only fills part of each DP row, so any slip in
//! the band or the sentinel shows up as a word the linear scan finds and the
//! trie misses (or the reverse).

#![no_main]

use arbitrary::Arbitrary;
use levtrie::{levenshtein, normalize, PrefixTrie, SearchOptions, Traversal};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    words: Vec<String>,
    query: String,
    max_distance: u8,
    breadth_first: bool,
}

fuzz_target!(|input: MatchInput| {
    // Cap sizes to keep the quadratic reference cheap
    let words: Vec<&str> = input
        .words
        .iter()
        .take(64)
        .map(|w| truncate(w, 32))
        .collect();
    let query = truncate(&input.query, 32);
    let n = (input.max_distance % 8) as usize;

    let mut trie = PrefixTrie::new();
    for word in &words {
        trie.insert(word);
    }

    let options = SearchOptions {
        traversal: if input.breadth_first {
            Traversal::BreadthFirst
        } else {
            Traversal::DepthFirst
        },
        ..SearchOptions::default()
    };
    let outcome = trie.search(query, n, &options);
    let expected = trie.linear_match(query, n);

    assert_eq!(
        outcome.words, expected,
        "query={:?} n={} words={:?}",
        query, n, words
    );
    assert!(outcome.nodes_visited <= trie.node_count());

    let normalized = normalize(query);
    for word in &outcome.words {
        assert!(levenshtein(&normalized, word) <= n);
    }
});

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
