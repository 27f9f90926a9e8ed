// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking candidates against a free-text query.
//!
//! Two tiers on one numeric axis:
//!
//! 1. **Substring** - the candidate's index contains the normalized query.
//!    Distance is `(len(index) - len(query)) * 0.01`, so tighter candidates
//!    come first and an exact hit scores 0.
//! 2. **Fuzzy** - otherwise, bounded edit distance with insertions at 0.1
//!    and deletions/replacements at 1. Candidates that do not fit under the
//!    ceiling are dropped.
//!
//! Every fuzzy hit costs at least one insertion, so a substring hit wins as
//! long as its slack is below `insertion_cost / substring_weight` (ten
//! characters with the defaults). Past that bound a long label containing the
//! query can tie with or lose to a near-miss on a short one. No bucket enum is
//! needed; a single sort does the job.
//!
//! The fuzzy ceiling is `min(floor(len(index) / 2), 2)`: short labels get a
//! proportionally small budget so "OSLO" does not match half the list.

use serde::Deserialize;

use crate::error::{check_cost, Result};
use crate::fuzzy::{bounded_distance, CostModel};
use crate::types::{Indexed, Match};
use crate::util::normalize::normalize;

// =============================================================================
// RANKING CONSTANTS
// =============================================================================

/// Distance per extra character of a substring hit.
pub const SUBSTRING_WEIGHT: f64 = 0.01;

/// Insertion cost on the fuzzy path. Cheap so that a query missing a few
/// letters of a long label still matches.
pub const FUZZY_INSERTION_COST: f64 = 0.1;

/// Upper limit on the fuzzy ceiling, whatever the label length.
pub const FUZZY_MAX_COST_CAP: f64 = 2.0;

/// Tunables for the ranking. `Default` gives the production values.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Insertion cost on the fuzzy path.
    pub insertion_cost: f64,
    /// Cap applied to `floor(len(index) / 2)` to get the fuzzy ceiling.
    pub max_cost_cap: f64,
    /// Distance per extra character of a substring hit.
    pub substring_weight: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            insertion_cost: FUZZY_INSERTION_COST,
            max_cost_cap: FUZZY_MAX_COST_CAP,
            substring_weight: SUBSTRING_WEIGHT,
        }
    }
}

impl SearchOptions {
    pub fn validate(&self) -> Result<()> {
        check_cost("insertion_cost", self.insertion_cost)?;
        check_cost("max_cost_cap", self.max_cost_cap)?;
        check_cost("substring_weight", self.substring_weight)?;
        Ok(())
    }

    /// Fuzzy ceiling for a candidate index of `index_len` characters.
    pub fn ceiling_for(&self, index_len: usize) -> f64 {
        ((index_len / 2) as f64).min(self.max_cost_cap)
    }

    /// The cost model used on the fuzzy path for an index of `index_len` characters.
    pub fn cost_model_for(&self, index_len: usize) -> CostModel {
        CostModel::new(self.ceiling_for(index_len)).with_insertion_cost(self.insertion_cost)
    }
}

/// Rank `candidates` against `query` and return their positions, best first.
///
/// Candidates that neither contain the query nor fall within the fuzzy
/// ceiling are left out. Equal distances keep their input order.
///
/// ```
/// use pingmap::find_results;
///
/// let targets = ["NEWYORKCITY", "NYC", "LONDON"];
/// assert_eq!(find_results("nyc", &targets), vec![1, 0]);
/// ```
pub fn find_results<T: Indexed>(query: &str, candidates: &[T]) -> Vec<usize> {
    positions(score_all(query, candidates, &SearchOptions::default()))
}

/// [`find_results`] with custom tunables, validated before any work is done.
pub fn find_results_with<T: Indexed>(
    query: &str,
    candidates: &[T],
    options: &SearchOptions,
) -> Result<Vec<usize>> {
    Ok(positions(rank(query, candidates, options)?))
}

/// Like [`find_results_with`], but keeps the distances.
pub fn rank<T: Indexed>(
    query: &str,
    candidates: &[T],
    options: &SearchOptions,
) -> Result<Vec<Match>> {
    options.validate()?;
    Ok(score_all(query, candidates, options))
}

fn positions(matches: Vec<Match>) -> Vec<usize> {
    matches.into_iter().map(|m| m.position).collect()
}

/// Options must already be valid.
fn score_all<T: Indexed>(query: &str, candidates: &[T], options: &SearchOptions) -> Vec<Match> {
    let query = normalize(query);
    let query_chars: Vec<char> = query.chars().collect();

    let mut matches: Vec<Match> = candidates
        .iter()
        .enumerate()
        .filter_map(|(position, candidate)| {
            score(&query, &query_chars, candidate.index(), options)
                .map(|distance| Match { position, distance })
        })
        .collect();

    // Stable, so ties keep input order.
    matches.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    log::debug!(
        "query {:?}: {} of {} candidates matched",
        query,
        matches.len(),
        candidates.len()
    );
    matches
}

fn score(query: &str, query_chars: &[char], index: &str, options: &SearchOptions) -> Option<f64> {
    let index_len = index.chars().count();

    if index.contains(query) {
        let slack = index_len.saturating_sub(query_chars.len());
        return Some(slack as f64 * options.substring_weight);
    }

    let index_chars: Vec<char> = index.chars().collect();
    bounded_distance(query_chars, &index_chars, &options.cost_model_for(index_len))
}
