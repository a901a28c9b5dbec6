// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading document collections from disk.
//!
//! Two shapes are accepted: plain text with one document per line, and JSON
//! (either a bare array of strings or `{ "documents": [...] }`).

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// How to interpret a corpus file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CorpusFormat {
    /// Pick by extension: `.json` is JSON, anything else is lines.
    #[default]
    Auto,
    /// One document per non-empty line.
    Lines,
    /// JSON array of strings, or an object with a `documents` array.
    Json,
}

impl FromStr for CorpusFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "lines" | "text" | "txt" => Ok(Self::Lines),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnknownVariant {
                kind: "corpus format",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCorpus {
    List(Vec<String>),
    Object { documents: Vec<String> },
}

/// Read every document in the file at `path`.
pub fn load_corpus(path: &Path, format: CorpusFormat) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let format = match format {
        CorpusFormat::Auto => detect_format(path),
        other => other,
    };

    let documents = match format {
        CorpusFormat::Json => parse_json(&content).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?,
        _ => parse_lines(&content),
    };

    debug!(path = %path.display(), ?format, documents = documents.len(), "loaded corpus");
    Ok(documents)
}

fn detect_format(path: &Path) -> CorpusFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => CorpusFormat::Json,
        _ => CorpusFormat::Lines,
    }
}

fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_json(content: &str) -> std::result::Result<Vec<String>, serde_json::Error> {
    Ok(match serde_json::from_str(content)? {
        JsonCorpus::List(documents) | JsonCorpus::Object { documents } => documents,
    })
}
