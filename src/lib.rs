//! Fuzzy full-text search over a prefix trie.
//!
//! Given a query and an edit distance bound, find every indexed word within
//! that many edits of the query, and every document containing one of them.
//! Results are unordered sets; there is no ranking.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌───────────────────┐
//! │ util/        │────▶│ trie/            │────▶│ index.rs          │
//! │ (normalize,  │     │ (PrefixTrie,     │     │ (SearchIndex:     │
//! │  tokenize)   │     │  banded search)  │     │  word → documents)│
//! └──────────────┘     └──────────────────┘     └───────────────────┘
//!                              │
//!                              ▼
//!                      ┌──────────────────┐
//!                      │ fuzzy/           │
//!                      │ (row step,       │
//!                      │  levenshtein)    │
//!                      └──────────────────┘
//! ```
//!
//! The interesting part is the trie walk. Each node's edit-distance row is
//! derived from its parent's, only a band of width `2n + 2` around the
//! diagonal is computed, and any subtree whose row minimum exceeds the bound
//! is skipped. For small bounds that touches a small fraction of the trie.
//!
//! # Usage
//!
//! ```
//! use levtrie::SearchIndex;
//!
//! let index = SearchIndex::new(["cat dog", "dog mouse"]);
//!
//! let hits = index.fuzzy_match("cats", 1);
//! assert_eq!(hits.len(), 1);
//! assert!(hits.contains("cat dog"));
//! ```

// Module declarations
pub mod corpus;
pub mod error;
pub mod fuzzy;
mod index;
pub mod testing;
mod trie;
mod util;

// Re-exports for public API
pub use corpus::{load_corpus, CorpusFormat};
pub use error::{Error, Result};
pub use fuzzy::{levenshtein, levenshtein_within, MaxDistance};
pub use index::{IndexStats, SearchIndex};
pub use trie::{ChildOrder, NodeId, PrefixTrie, SearchOptions, SearchOutcome, Traversal};
pub use util::{normalize, tokenize, PLACEHOLDER};
