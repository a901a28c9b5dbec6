// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit-distance search over the trie.
//!
//! Every node extends its parent's prefix by one byte, so its distance row is
//! one step of the DP away from the parent's row ([`next_row`]). Words that
//! share a prefix share those rows, which is the whole point of the trie.
//!
//! Rows are kept in a side-table owned by the search call, not on the nodes.
//! The trie stays immutable during a search, so one trie can serve many
//! concurrent readers.
//!
//! # Pruning
//!
//! - The last entry of a row is the distance from the prefix to the full
//!   query. A terminal node with `row[|q|] <= n` is a match.
//! - Row minima never decrease along a path. If `min(row) > n`, no descendant
//!   can come back under budget, so the subtree is skipped.
//!
//! The result doesn't depend on visiting order. The only ordering constraint
//! is parent-before-child, which every frontier satisfies because children
//! are pushed after their parent's row exists.

use super::{NodeId, PrefixTrie};
use crate::fuzzy::row::{identity_row, next_row, row_min};
use crate::util::normalize;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use std::str::FromStr;
use tracing::{debug, trace};

/// Frontier discipline for the traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Traversal {
    /// Stack: finish one branch before starting the next.
    #[default]
    DepthFirst,
    /// Queue: visit all prefixes of length `d` before length `d + 1`.
    BreadthFirst,
}

impl FromStr for Traversal {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Self::DepthFirst),
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            _ => Err(crate::Error::UnknownVariant {
                kind: "traversal",
                value: s.to_string(),
            }),
        }
    }
}

/// Order in which a node's children are pushed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChildOrder {
    /// Ascending by edge byte.
    #[default]
    Forward,
    /// Descending by edge byte.
    Reverse,
}

/// Knobs for [`PrefixTrie::search`]. None of them change the result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    pub traversal: Traversal,
    pub child_order: ChildOrder,
}

/// Result of a trie search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Matching normalized words.
    pub words: HashSet<String>,
    /// Nodes whose row was computed. Pruned subtrees don't count.
    pub nodes_visited: usize,
}

enum Frontier {
    Stack(Vec<NodeId>),
    Queue(VecDeque<NodeId>),
}

impl Frontier {
    fn new(traversal: Traversal, root: NodeId) -> Self {
        match traversal {
            Traversal::DepthFirst => Frontier::Stack(vec![root]),
            Traversal::BreadthFirst => Frontier::Queue(VecDeque::from([root])),
        }
    }

    fn push(&mut self, id: NodeId) {
        match self {
            Frontier::Stack(stack) => stack.push(id),
            Frontier::Queue(queue) => queue.push_back(id),
        }
    }

    fn pop(&mut self) -> Option<NodeId> {
        match self {
            Frontier::Stack(stack) => stack.pop(),
            Frontier::Queue(queue) => queue.pop_front(),
        }
    }
}

impl PrefixTrie {
    /// Every word within `max_distance` edits of the normalized `query`,
    /// plus how much of the trie had to be touched to find them.
    pub fn search(&self, query: &str, max_distance: usize, options: &SearchOptions) -> SearchOutcome {
        let query = normalize(query);
        let outcome = self.search_normalized(query.as_bytes(), max_distance, options);
        debug!(
            query = %query,
            max_distance,
            nodes_visited = outcome.nodes_visited,
            node_count = self.node_count(),
            matches = outcome.words.len(),
            "trie search"
        );
        outcome
    }

    fn search_normalized(&self, query: &[u8], max_distance: usize, options: &SearchOptions) -> SearchOutcome {
        let mut words = HashSet::new();
        // Doubles as the visited set: a node is visited once its row exists
        let mut rows: HashMap<NodeId, Vec<usize>> = HashMap::new();
        let mut frontier = Frontier::new(options.traversal, NodeId::ROOT);

        while let Some(id) = frontier.pop() {
            if rows.contains_key(&id) {
                continue;
            }

            let node = self.node(id);
            let row = match (node.parent, node.edge()) {
                (Some(parent), Some(edge)) => {
                    let parent_row = &rows[&parent];
                    next_row(parent_row, query, edge, node.depth(), max_distance)
                }
                _ => identity_row(query.len()),
            };

            if node.terminal && row[query.len()] <= max_distance {
                words.insert(node.prefix.clone());
            }

            if row_min(&row) <= max_distance {
                match options.child_order {
                    ChildOrder::Forward => node.children.iter().for_each(|&(_, c)| frontier.push(c)),
                    ChildOrder::Reverse => node.children.iter().rev().for_each(|&(_, c)| frontier.push(c)),
                }
            } else {
                trace!(prefix = %node.prefix, "pruned");
            }

            rows.insert(id, row);
        }

        SearchOutcome {
            words,
            nodes_visited: rows.len(),
        }
    }
}
