// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by the trie and the index.

pub mod normalize;

pub use normalize::{normalize, tokenize, PLACEHOLDER};
