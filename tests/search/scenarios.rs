//! Literal scenarios: fixed dictionaries with hand-checked answers.

use crate::common::{make_trie, set, OLIVIER_WORDS};
use levtrie::{PrefixTrie, SearchIndex};

#[test]
fn olivier_exact() {
    let trie = make_trie(OLIVIER_WORDS);
    assert_eq!(trie.fuzzy_match("olivier", 0), set(&["olivier"]));
}

#[test]
fn olivier_one_edit() {
    let trie = make_trie(OLIVIER_WORDS);
    assert_eq!(trie.fuzzy_match("olivier", 1), set(&["oliver", "olivier", "alivier"]));
}

#[test]
fn olivier_two_edits() {
    let trie = make_trie(OLIVIER_WORDS);
    assert_eq!(
        trie.fuzzy_match("olivier", 2),
        set(&["oliver", "olivier", "alivier", "aliver"])
    );
}

#[test]
fn olivia_needs_two_edits() {
    let trie = make_trie(OLIVIER_WORDS);
    assert_eq!(trie.fuzzy_match("olivia", 0), set(&[]));
    assert_eq!(trie.fuzzy_match("olivia", 1), set(&[]));
    assert_eq!(trie.fuzzy_match("olivia", 2), set(&["oliver", "olivier"]));
    assert_eq!(
        trie.fuzzy_match("olivia", 3),
        set(&["oliver", "olivier", "alivier", "aliver"])
    );
}

#[test]
fn empty_trie_matches_nothing() {
    let trie = PrefixTrie::new();
    for query in ["", "a", "olivier", "extravagant"] {
        for n in 0..5 {
            assert!(trie.fuzzy_match(query, n).is_empty(), "{:?} @ {}", query, n);
        }
    }
}

#[test]
fn cat_dog_mouse_documents() {
    let index = SearchIndex::new(["cat dog", "dog mouse"]);
    assert_eq!(index.fuzzy_match("dog", 0), set(&["cat dog", "dog mouse"]));
    assert_eq!(index.fuzzy_match("cats", 1), set(&["cat dog"]));
}

#[test]
fn mixed_case_documents_match_lowercase_queries() {
    let index = SearchIndex::new(["Television and TV", "A computer; a MAIL."]);
    assert_eq!(index.fuzzy_match("televisions", 1), set(&["Television and TV"]));
    assert_eq!(index.fuzzy_match("Mail!", 0), set(&["A computer; a MAIL."]));
    assert_eq!(index.fuzzy_match("a", 0), set(&["A computer; a MAIL."]));
}

#[test]
fn short_words_reach_many_at_large_distance() {
    let trie = make_trie(&["a", "c", "tv", "dog", "cat"]);
    assert_eq!(trie.fuzzy_match("b", 1), set(&["a", "c"]));
    assert_eq!(trie.fuzzy_match("b", 2), set(&["a", "c", "tv"]));
    assert_eq!(trie.fuzzy_match("b", 3), set(&["a", "c", "tv", "dog", "cat"]));
}
