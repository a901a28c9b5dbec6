// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Two implementations here: the banded row step the trie walks with, and a
//! simple bounded Levenshtein for one-off comparisons against a single word.

mod levenshtein;
pub mod row;

pub use levenshtein::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated, non-negative edit distance bound.
///
/// The library API takes plain `usize`, which can't be negative. This type is
/// for the edges where the bound arrives as a signed number or as text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaxDistance(usize);

impl MaxDistance {
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for MaxDistance {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<MaxDistance> for usize {
    fn from(value: MaxDistance) -> Self {
        value.0
    }
}

impl TryFrom<i64> for MaxDistance {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        if value < 0 {
            return Err(Error::NegativeDistance(value));
        }
        usize::try_from(value)
            .map(Self)
            .map_err(|_| Error::InvalidDistance(value.to_string()))
    }
}

impl FromStr for MaxDistance {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| Error::InvalidDistance(s.to_string()))?;
        Self::try_from(value)
    }
}

impl fmt::Display for MaxDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
