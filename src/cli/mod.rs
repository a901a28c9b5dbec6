// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the levtrie command-line interface.
//!
//! Three subcommands: `search` to query a corpus, `stats` to see how big the
//! index gets, and `verify` to cross-check the trie against a linear scan.
//! Every command builds the index in memory from the corpus file; nothing is
//! persisted.

pub mod display;

use clap::{Args, Parser, Subcommand};
use levtrie::{CorpusFormat, MaxDistance, Traversal};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "levtrie", about = "Fuzzy full-text search over a prefix trie", version)]
pub struct Cli {
    /// Log debug output to stderr (overridden by LEVTRIE_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the documents come from.
#[derive(Args)]
pub struct CorpusArgs {
    /// Corpus file: one document per line, or JSON
    pub corpus: PathBuf,

    /// Corpus format: auto, lines, json
    #[arg(long, default_value = "auto")]
    pub format: CorpusFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find documents (or words) within an edit distance of a query
    Search {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Search query
        query: String,

        /// Maximum edit distance
        #[arg(short = 'd', long, default_value = "1", allow_negative_numbers = true)]
        distance: MaxDistance,

        /// Traversal order: dfs or bfs (results are identical)
        #[arg(long, default_value = "dfs")]
        traversal: Traversal,

        /// Print matching words instead of documents
        #[arg(long)]
        words: bool,

        /// Emit JSON instead of a human-readable listing
        #[arg(long)]
        json: bool,
    },

    /// Show document, word, and node counts for a corpus
    Stats {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Emit JSON instead of a human-readable listing
        #[arg(long)]
        json: bool,
    },

    /// Check trie search against a linear scan for every query
    Verify {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Check every distance from 0 up to this bound
        #[arg(short = 'd', long, default_value = "2", allow_negative_numbers = true)]
        distance: MaxDistance,

        /// Query file, one query per line (default: every word in the corpus)
        #[arg(long)]
        queries: Option<PathBuf>,
    },
}
