// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index from normalized words to the documents that contain them.
//!
//! The trie answers "which words are close to the query"; the postings answer
//! "which documents contain those words". A fuzzy document search is the first
//! question followed by a union over the second.
//!
//! # INVARIANTS
//!
//! 1. **SAME_VOCABULARY**: the trie's words and the posting keys are the same set
//! 2. **NON_EMPTY**: every posting set has at least one document
//! 3. **NORMALIZED_ONCE**: tokens are normalized once, before both the trie
//!    insert and the posting key, so the two never disagree

use crate::trie::{PrefixTrie, SearchOptions};
use crate::util::{normalize, tokenize};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Size summary of an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub documents: usize,
    pub words: usize,
    pub nodes: usize,
}

/// Fuzzy document search over a word trie plus postings.
///
/// ```
/// use levtrie::SearchIndex;
///
/// let index = SearchIndex::new(["cat dog", "dog mouse"]);
/// assert_eq!(index.fuzzy_match("dog", 0).len(), 2);
/// assert!(index.fuzzy_match("cats", 1).contains("cat dog"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    trie: PrefixTrie,
    postings: HashMap<String, HashSet<String>>,
    documents: usize,
}

impl SearchIndex {
    /// Index every document in the collection.
    pub fn new<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self::default();
        for document in documents {
            index.add_document(document);
        }

        let stats = index.stats();
        info!(
            documents = stats.documents,
            words = stats.words,
            nodes = stats.nodes,
            "built search index"
        );
        index
    }

    /// Add one more document. Existing words gain a posting; new words are
    /// inserted into the trie.
    pub fn add_document(&mut self, document: impl Into<String>) {
        let document = document.into();
        let normalized = normalize(&document);

        for word in tokenize(&normalized) {
            self.trie.insert_normalized(word);
            match self.postings.get_mut(word) {
                Some(docs) => {
                    docs.insert(document.clone());
                }
                None => {
                    self.postings
                        .insert(word.to_string(), HashSet::from([document.clone()]));
                }
            }
        }
        self.documents += 1;
    }

    /// Every document containing a word within `max_distance` edits of `query`.
    pub fn fuzzy_match(&self, query: &str, max_distance: usize) -> HashSet<String> {
        self.search(query, max_distance, &SearchOptions::default())
    }

    /// [`SearchIndex::fuzzy_match`] with explicit traversal options.
    pub fn search(&self, query: &str, max_distance: usize, options: &SearchOptions) -> HashSet<String> {
        let outcome = self.trie.search(query, max_distance, options);
        let documents: HashSet<String> = outcome
            .words
            .iter()
            .filter_map(|word| self.postings.get(word))
            .flatten()
            .cloned()
            .collect();

        debug!(
            words = outcome.words.len(),
            documents = documents.len(),
            "expanded matches to documents"
        );
        documents
    }

    /// Run many queries against the same index, results in query order.
    #[cfg(feature = "parallel")]
    pub fn fuzzy_match_batch<S>(&self, queries: &[S], max_distance: usize) -> Vec<HashSet<String>>
    where
        S: AsRef<str> + Sync,
    {
        queries
            .par_iter()
            .map(|query| self.fuzzy_match(query.as_ref(), max_distance))
            .collect()
    }

    /// Run many queries against the same index, results in query order.
    #[cfg(not(feature = "parallel"))]
    pub fn fuzzy_match_batch<S>(&self, queries: &[S], max_distance: usize) -> Vec<HashSet<String>>
    where
        S: AsRef<str> + Sync,
    {
        queries
            .iter()
            .map(|query| self.fuzzy_match(query.as_ref(), max_distance))
            .collect()
    }

    /// Documents containing `word`, which must already be normalized (as
    /// returned by the trie). Normalizing again would strip placeholders.
    pub fn documents_for(&self, word: &str) -> Option<&HashSet<String>> {
        self.postings.get(word)
    }

    pub fn trie(&self) -> &PrefixTrie {
        &self.trie
    }

    /// Documents added so far, counting repeats.
    pub fn document_count(&self) -> usize {
        self.documents
    }

    /// Distinct normalized words.
    pub fn word_count(&self) -> usize {
        self.postings.len()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.documents,
            words: self.word_count(),
            nodes: self.trie.node_count(),
        }
    }
}
