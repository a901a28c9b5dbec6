// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for the crate boundary.
//!
//! The search core itself never fails: every string is a valid query and
//! distances are unsigned. Errors only appear where text from the outside world
//! gets turned into a distance bound or a document collection.

use std::io;
use std::path::PathBuf;

/// Errors surfaced by distance parsing and corpus loading.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A negative edit distance bound was supplied.
    #[error("max distance must be non-negative, got {0}")]
    NegativeDistance(i64),

    /// The distance bound is not an integer, or does not fit in `usize`.
    #[error("invalid max distance '{0}'")]
    InvalidDistance(String),

    /// Reading a corpus file failed.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A JSON corpus could not be parsed.
    #[error("invalid JSON corpus {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An unrecognised option value (corpus format, traversal, ...).
    #[error("unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
