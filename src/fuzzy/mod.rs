// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via bounded edit distance.
//!
//! One implementation, tuned for short strings and small ceilings. See
//! [`levenshtein`] for why it is a tree search and not a DP table.

mod levenshtein;

pub use levenshtein::{edit_distance, CostModel};

pub(crate) use levenshtein::bounded_distance;
