// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query and index normalization.
//!
//! Both sides of a comparison go through the same function, so "new york",
//! "New-York" and "NEWYORK" all land on the same string. The alphabet is
//! deliberately tiny: uppercase ASCII letters. Everything else (spaces, digits,
//! punctuation, accented letters) is dropped rather than folded.

/// Normalize text to the comparison alphabet `A-Z`.
///
/// - `a-z` is uppercased
/// - `A-Z` is kept
/// - every other character is dropped
///
/// # Example
///
/// ```
/// use pingmap::normalize;
///
/// assert_eq!(normalize("São Paulo, BR"), "SOPAULOBR");
/// assert_eq!(normalize("new york"), "NEWYORK");
/// ```
pub fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
