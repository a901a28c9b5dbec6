//! Property tests for the banded trie search.
//!
//! The band and the pruning rule are easy to get subtly wrong (an off-by-one
//! in the band only shows up for specific length gaps), so every property here
//! runs against dictionaries built from random edits of a base word list.

use super::oracles::oracle_fuzzy_match;
use crate::common::{make_trie, noisy_dictionary_strategy, noisy_word_strategy};
use levtrie::{normalize, ChildOrder, SearchOptions, Traversal};
use proptest::prelude::*;

/// Maximum distance exercised. Large enough that the band covers whole words.
const MAX_N: usize = 5;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: trie search equals brute force over every word.
    #[test]
    fn prop_trie_matches_oracle(
        dictionary in noisy_dictionary_strategy(4),
        queries in prop::collection::vec(noisy_word_strategy(4), 1..6),
    ) {
        let trie = make_trie(&dictionary);
        for query in &queries {
            for n in 0..=MAX_N {
                prop_assert_eq!(
                    trie.fuzzy_match(query, n),
                    oracle_fuzzy_match(&trie, query, n),
                    "query={:?} n={}", query, n
                );
            }
        }
    }

    /// Property: linear scan and trie agree too (same oracle, library side).
    #[test]
    fn prop_trie_matches_linear_scan(
        dictionary in noisy_dictionary_strategy(3),
        query in noisy_word_strategy(3),
        n in 0..=MAX_N,
    ) {
        let trie = make_trie(&dictionary);
        prop_assert_eq!(trie.fuzzy_match(&query, n), trie.linear_match(&query, n));
    }

    /// Property: fuzzy_match(q, n) ⊆ fuzzy_match(q, n + 1)
    #[test]
    fn prop_monotonic_in_distance(
        dictionary in noisy_dictionary_strategy(3),
        query in noisy_word_strategy(3),
    ) {
        let trie = make_trie(&dictionary);
        for n in 0..MAX_N {
            let smaller = trie.fuzzy_match(&query, n);
            let larger = trie.fuzzy_match(&query, n + 1);
            prop_assert!(smaller.is_subset(&larger), "n={} not a subset of n={}", n, n + 1);
        }
    }

    /// Property: distance 0 is exact membership.
    #[test]
    fn prop_distance_zero_is_exact(
        dictionary in noisy_dictionary_strategy(2),
        query in noisy_word_strategy(2),
    ) {
        let trie = make_trie(&dictionary);
        let matches = trie.fuzzy_match(&query, 0);
        if trie.contains(&query) {
            prop_assert_eq!(matches.len(), 1);
            prop_assert!(matches.contains(&normalize(&query)));
        } else {
            prop_assert!(matches.is_empty());
        }
    }

    /// Property: every inserted word finds itself at distance 0.
    #[test]
    fn prop_every_word_finds_itself(dictionary in noisy_dictionary_strategy(2)) {
        let trie = make_trie(&dictionary);
        for word in &dictionary {
            let normalized = normalize(word);
            prop_assert!(trie.fuzzy_match(word, 0).contains(&normalized));
        }
    }

    /// Property: result is independent of frontier and child order.
    #[test]
    fn prop_traversal_order_independent(
        dictionary in noisy_dictionary_strategy(3),
        query in noisy_word_strategy(3),
        n in 0..=MAX_N,
    ) {
        let trie = make_trie(&dictionary);
        let baseline = trie.fuzzy_match(&query, n);
        for traversal in [Traversal::DepthFirst, Traversal::BreadthFirst] {
            for child_order in [ChildOrder::Forward, ChildOrder::Reverse] {
                let options = SearchOptions { traversal, child_order };
                prop_assert_eq!(&trie.search(&query, n, &options).words, &baseline);
            }
        }
    }

    /// Property: pruning never visits more nodes than exist, and a bigger
    /// budget never visits fewer.
    #[test]
    fn prop_visited_nodes_bounded(
        dictionary in noisy_dictionary_strategy(3),
        query in noisy_word_strategy(3),
    ) {
        let trie = make_trie(&dictionary);
        let mut previous = 0;
        for n in 0..=MAX_N {
            let visited = trie.search(&query, n, &SearchOptions::default()).nodes_visited;
            prop_assert!(visited <= trie.node_count());
            prop_assert!(visited >= previous);
            previous = visited;
        }
    }
}
