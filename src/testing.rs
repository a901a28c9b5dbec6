//! Test utilities shared across unit tests, integration tests, and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::trie::PrefixTrie;

/// Seed vocabulary for noisy dictionaries. Mixed case on purpose.
pub const BASE_WORDS: &[&str] = &[
    "A",
    "C",
    "Olivier",
    "Oliver",
    "Oli",
    "banana",
    "tomato",
    "extravagant",
    "dog",
    "cat",
    "test",
    "potato",
    "mail",
    "computer",
    "tv",
    "television",
];

/// The four-name dictionary used in the smoke scenarios.
pub const OLIVIER_WORDS: &[&str] = &["Olivier", "Oliver", "Alivier", "aliver"];

/// Build a trie from a word list.
pub fn make_trie<S: AsRef<str>>(words: &[S]) -> PrefixTrie {
    let mut trie = PrefixTrie::new();
    for word in words {
        trie.insert(word.as_ref());
    }
    trie
}

/// One edit applied to a word. Positions wrap around the word length.
#[derive(Debug, Clone, Copy)]
pub enum Edit {
    Substitute(usize, char),
    Insert(usize, char),
    Delete(usize),
}

/// Apply an edit. Substituting or deleting in an empty word is a no-op.
pub fn apply_edit(word: &str, edit: Edit) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    match edit {
        Edit::Substitute(pos, c) if !chars.is_empty() => {
            let pos = pos % chars.len();
            chars[pos] = c;
        }
        Edit::Insert(pos, c) => {
            let pos = pos % (chars.len() + 1);
            chars.insert(pos, c);
        }
        Edit::Delete(pos) if !chars.is_empty() => {
            let pos = pos % chars.len();
            chars.remove(pos);
        }
        _ => {}
    }
    chars.into_iter().collect()
}
