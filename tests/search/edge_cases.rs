//! Edge cases: empty strings, punctuation-only input, non-ASCII text, and
//! queries much longer or shorter than anything in the trie.

use crate::common::{make_trie, set};
use levtrie::{PrefixTrie, SearchIndex, SearchOptions};

#[test]
fn empty_query_matches_words_up_to_n_long() {
    let trie = make_trie(&["a", "tv", "dog", "mail"]);
    assert_eq!(trie.fuzzy_match("", 0), set(&[]));
    assert_eq!(trie.fuzzy_match("", 2), set(&["a", "tv"]));
    assert_eq!(trie.fuzzy_match("", 4), set(&["a", "tv", "dog", "mail"]));
}

#[test]
fn punctuation_only_query_is_empty_query() {
    let trie = make_trie(&["a", "tv"]);
    assert_eq!(trie.fuzzy_match("?!...", 1), trie.fuzzy_match("", 1));
}

#[test]
fn punctuation_only_word_is_empty_word() {
    let mut trie = PrefixTrie::new();
    trie.insert("---");
    assert_eq!(trie.len(), 1);
    assert_eq!(trie.fuzzy_match("", 0), set(&[""]));
    assert_eq!(trie.fuzzy_match("x", 1), set(&[""]));
}

#[test]
fn query_far_longer_than_any_word() {
    let trie = make_trie(&["cat", "dog"]);
    assert!(trie.fuzzy_match("catastrophically", 3).is_empty());
    assert_eq!(trie.fuzzy_match("catastrophically", 13), set(&["cat"]));
}

#[test]
fn word_far_longer_than_query() {
    let trie = make_trie(&["extravagant", "ex"]);
    assert_eq!(trie.fuzzy_match("e", 1), set(&["ex"]));
    assert_eq!(trie.fuzzy_match("e", 10), set(&["ex", "extravagant"]));
}

#[test]
fn huge_distance_matches_everything() {
    let trie = make_trie(&["banana", "tomato", "potato"]);
    assert_eq!(
        trie.fuzzy_match("x", usize::MAX),
        set(&["banana", "tomato", "potato"])
    );
}

#[test]
#[cfg(not(feature = "transliterate"))]
fn non_ascii_is_replaced_on_both_sides() {
    let index = SearchIndex::new(["crème brûlée"]);
    let words: Vec<&str> = index.trie().words().collect();
    assert!(words.iter().all(|w| w.is_ascii()));
    assert_eq!(index.fuzzy_match("brûlée", 0), set(&["crème brûlée"]));
    // Each accented character costs one substitution against plain ASCII
    assert_eq!(index.fuzzy_match("brulee", 1), set(&[]));
    assert_eq!(index.fuzzy_match("brulee", 2), set(&["crème brûlée"]));
}

#[test]
#[cfg(feature = "transliterate")]
fn diacritics_are_stripped() {
    let index = SearchIndex::new(["crème brûlée"]);
    assert_eq!(index.fuzzy_match("brulee", 0), set(&["crème brûlée"]));
}

#[test]
fn whitespace_variants_split_words() {
    let index = SearchIndex::new(["cat\tdog\nmouse  trap"]);
    assert_eq!(index.word_count(), 4);
    assert_eq!(index.fuzzy_match("trap", 0).len(), 1);
}

#[test]
fn duplicate_documents_collapse() {
    let index = SearchIndex::new(["cat dog", "cat dog"]);
    assert_eq!(index.document_count(), 2);
    assert_eq!(index.fuzzy_match("cat", 0), set(&["cat dog"]));
}

#[test]
fn search_with_options_matches_default() {
    let index = SearchIndex::new(["cat dog", "dog mouse"]);
    let options = SearchOptions::default();
    assert_eq!(index.search("dgo", 2, &options), index.fuzzy_match("dgo", 2));
}
