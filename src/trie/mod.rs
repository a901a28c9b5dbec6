// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix trie over normalized words.
//!
//! Nodes live in a flat arena and refer to each other by [`NodeId`]. A node
//! owns nothing; the arena owns everything. The parent link is just another
//! index, so there are no ownership cycles and nothing to free individually.
//! Nodes are never removed, so an id handed out once stays valid for the
//! lifetime of the trie.
//!
//! # INVARIANTS
//!
//! 1. **ROOT**: node 0 is the root, with an empty prefix and no parent
//! 2. **DEPTH**: a node's prefix has exactly as many bytes as its depth
//! 3. **PREFIX_CHAIN**: a child's prefix is its parent's prefix plus the edge byte
//! 4. **ONE_EDGE**: at most one child per byte, children sorted by byte
//! 5. **ASCII**: every prefix is ASCII (guaranteed by [`normalize`])

mod search;

pub use search::{ChildOrder, SearchOptions, SearchOutcome, Traversal};

use crate::fuzzy::levenshtein_within;
use crate::util::normalize;
use std::collections::HashSet;

/// Index of a node in the trie's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TrieNode {
    /// Normalized prefix spelled by the path from the root.
    pub(crate) prefix: String,
    /// Non-owning link back to the parent. `None` only for the root.
    pub(crate) parent: Option<NodeId>,
    /// Edges sorted by byte.
    pub(crate) children: Vec<(u8, NodeId)>,
    /// True iff `prefix` is a complete inserted word.
    pub(crate) terminal: bool,
}

impl TrieNode {
    fn root() -> Self {
        Self {
            prefix: String::new(),
            parent: None,
            children: Vec::new(),
            terminal: false,
        }
    }

    fn child(&self, edge: u8) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&edge, |&(byte, _)| byte)
            .ok()
            .map(|pos| self.children[pos].1)
    }

    /// Byte on the edge into this node. Undefined for the root.
    pub(crate) fn edge(&self) -> Option<u8> {
        self.prefix.as_bytes().last().copied()
    }

    pub(crate) fn depth(&self) -> usize {
        self.prefix.len()
    }
}

/// A trie of normalized words supporting edit-distance search.
///
/// ```
/// use levtrie::PrefixTrie;
///
/// let mut trie = PrefixTrie::new();
/// for word in ["Olivier", "Oliver", "Alivier", "aliver"] {
///     trie.insert(word);
/// }
///
/// let matches = trie.fuzzy_match("olivier", 1);
/// assert!(matches.contains("oliver"));
/// assert!(!matches.contains("aliver"));
/// ```
#[derive(Debug, Clone)]
pub struct PrefixTrie {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixTrie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::root()],
            words: 0,
        }
    }

    /// Normalize `word` and add it to the trie.
    ///
    /// Inserting the same word twice is a no-op. A word that normalizes to
    /// the empty string marks the root as terminal.
    pub fn insert(&mut self, word: &str) {
        self.insert_normalized(&normalize(word));
    }

    /// Add an already-normalized word, returning its terminal node.
    pub(crate) fn insert_normalized(&mut self, word: &str) -> NodeId {
        debug_assert!(word.is_ascii(), "normalized words are ASCII: {:?}", word);

        let mut current = NodeId::ROOT;
        for (i, edge) in word.bytes().enumerate() {
            current = match self.nodes[current.0].child(edge) {
                Some(next) => next,
                None => self.add_child(current, edge, &word[..=i]),
            };
        }

        let node = &mut self.nodes[current.0];
        if !node.terminal {
            node.terminal = true;
            self.words += 1;
        }
        current
    }

    fn add_child(&mut self, parent: NodeId, edge: u8, prefix: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TrieNode {
            prefix: prefix.to_string(),
            parent: Some(parent),
            children: Vec::new(),
            terminal: false,
        });

        let children = &mut self.nodes[parent.0].children;
        let pos = children.partition_point(|&(byte, _)| byte < edge);
        children.insert(pos, (edge, id));
        id
    }

    /// Is `word` (after normalization) in the trie?
    pub fn contains(&self, word: &str) -> bool {
        let word = normalize(word);
        let mut current = NodeId::ROOT;
        for edge in word.bytes() {
            match self.nodes[current.0].child(edge) {
                Some(next) => current = next,
                None => return false,
            }
        }
        self.nodes[current.0].terminal
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Every inserted word, in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.nodes
            .iter()
            .filter(|node| node.terminal)
            .map(|node| node.prefix.as_str())
    }

    /// Every word within `max_distance` edits of the normalized `query`.
    ///
    /// Depth-first with banded rows; see [`PrefixTrie::search`] for the knobs.
    pub fn fuzzy_match(&self, query: &str, max_distance: usize) -> HashSet<String> {
        self.search(query, max_distance, &SearchOptions::default()).words
    }

    /// Same contract as [`PrefixTrie::fuzzy_match`], by comparing `query`
    /// against every word in turn. No sharing, no pruning.
    pub fn linear_match(&self, query: &str, max_distance: usize) -> HashSet<String> {
        let query = normalize(query);
        self.words()
            .filter(|word| levenshtein_within(word, &query, max_distance))
            .map(str::to_string)
            .collect()
    }

    pub(crate) fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }
}
