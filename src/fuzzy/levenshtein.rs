// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cost-bounded edit distance as a branch-and-bound search.
//!
//! This is not Wagner-Fischer. The inputs here are a short query against a
//! short label with a ceiling of one or two edits, so instead of filling an
//! O(nm) table we walk the alignment tree depth-first and cut every branch
//! that cannot beat the best complete alignment found so far. With a tight
//! ceiling most of the tree is never visited. With a loose ceiling and long
//! strings it is exponential, which is why callers keep the ceiling small.
//!
//! Three things keep the walk cheap:
//!
//! 1. Runs of equal characters are consumed greedily at zero cost before any
//!    edit is tried. Free matching makes this safe: it never changes the
//!    minimum, only the order in which alignments are found.
//! 2. A branch is entered only if its cost stays within `max_cost` and is
//!    strictly below the best complete alignment seen so far.
//! 3. Length gaps that the enabled operations cannot close are rejected
//!    before the walk starts.
//!
//! Strings are compared as `char`s (Unicode scalar values), so an emoji or
//! any other astral-plane character costs exactly one edit.

use serde::Deserialize;

use crate::error::{check_cost, Result};

fn default_cost() -> f64 {
    1.0
}

fn default_allow() -> bool {
    true
}

/// Which edit operations are allowed and what each one costs.
///
/// Matching equal characters is always free. `max_cost` has no default; the
/// three operations are enabled at cost `1.0` unless configured otherwise.
///
/// ```
/// use pingmap::CostModel;
///
/// let model = CostModel::new(2.0).with_insertion_cost(0.1).without_deletion();
/// assert!(model.allow_insertion && !model.allow_deletion);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CostModel {
    /// Hard ceiling on the total cost of an alignment.
    pub max_cost: f64,
    #[serde(default = "default_allow")]
    pub allow_insertion: bool,
    #[serde(default = "default_cost")]
    pub insertion_cost: f64,
    #[serde(default = "default_allow")]
    pub allow_deletion: bool,
    #[serde(default = "default_cost")]
    pub deletion_cost: f64,
    #[serde(default = "default_allow")]
    pub allow_replacement: bool,
    #[serde(default = "default_cost")]
    pub replacement_cost: f64,
}

impl CostModel {
    /// All operations enabled at unit cost, bounded by `max_cost`.
    pub fn new(max_cost: f64) -> Self {
        Self {
            max_cost,
            allow_insertion: true,
            insertion_cost: default_cost(),
            allow_deletion: true,
            deletion_cost: default_cost(),
            allow_replacement: true,
            replacement_cost: default_cost(),
        }
    }

    pub fn with_insertion_cost(mut self, cost: f64) -> Self {
        self.insertion_cost = cost;
        self
    }

    pub fn with_deletion_cost(mut self, cost: f64) -> Self {
        self.deletion_cost = cost;
        self
    }

    pub fn with_replacement_cost(mut self, cost: f64) -> Self {
        self.replacement_cost = cost;
        self
    }

    pub fn without_insertion(mut self) -> Self {
        self.allow_insertion = false;
        self
    }

    pub fn without_deletion(mut self) -> Self {
        self.allow_deletion = false;
        self
    }

    pub fn without_replacement(mut self) -> Self {
        self.allow_replacement = false;
        self
    }

    /// Reject negative or non-finite costs.
    ///
    /// Costs of disabled operations are checked too.
    pub fn validate(&self) -> Result<()> {
        check_cost("max_cost", self.max_cost)?;
        check_cost("insertion_cost", self.insertion_cost)?;
        check_cost("deletion_cost", self.deletion_cost)?;
        check_cost("replacement_cost", self.replacement_cost)?;
        Ok(())
    }
}

/// Minimum cost to turn `a` into `b`, or `None` if it exceeds `model.max_cost`.
///
/// - insertion consumes one character of `b`
/// - deletion consumes one character of `a`
/// - replacement consumes one character of each (only when they differ)
///
/// `Ok(None)` means no alignment fits under the ceiling, or the enabled
/// operations cannot produce one at all. An invalid model is an error and no
/// comparison work is done.
///
/// ```
/// use pingmap::{edit_distance, CostModel};
///
/// let model = CostModel::new(2.0);
/// assert_eq!(edit_distance("LOMDON", "LONDON", &model).unwrap(), Some(1.0));
/// assert_eq!(edit_distance("ABC", "XYZ", &model).unwrap(), None);
/// assert!(edit_distance("a", "b", &CostModel::new(-1.0)).is_err());
/// ```
pub fn edit_distance(a: &str, b: &str, model: &CostModel) -> Result<Option<f64>> {
    model.validate()?;
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    Ok(bounded_distance(&a, &b, model))
}

/// Edit distance over pre-decoded characters. The model must already be valid.
pub(crate) fn bounded_distance(a: &[char], b: &[char], model: &CostModel) -> Option<f64> {
    debug_assert!(model.validate().is_ok(), "cost model not validated");

    if !length_gap_bridgeable(a.len(), b.len(), model) {
        return None;
    }

    BoundedSearch {
        a,
        b,
        model,
        best: f64::INFINITY,
    }
    .run()
}

/// Can the enabled operations make up the length difference at all?
///
/// Replacement preserves length, so a longer `b` needs insertions and a
/// longer `a` needs deletions.
fn length_gap_bridgeable(a_len: usize, b_len: usize, model: &CostModel) -> bool {
    match a_len.cmp(&b_len) {
        std::cmp::Ordering::Less => model.allow_insertion,
        std::cmp::Ordering::Greater => model.allow_deletion,
        std::cmp::Ordering::Equal => true,
    }
}

/// State for one top-level call. Owned by the call, never shared.
struct BoundedSearch<'a> {
    a: &'a [char],
    b: &'a [char],
    model: &'a CostModel,
    /// Cheapest complete alignment found so far. Only ever decreases.
    best: f64,
}

impl BoundedSearch<'_> {
    /// Is a partial alignment at `cost` still worth extending?
    #[inline]
    fn admits(&self, cost: f64) -> bool {
        cost < self.best && cost <= self.model.max_cost
    }

    /// Depth-first walk with an explicit stack.
    ///
    /// Zero-cost edits never tighten the bound, so the tree can be as deep as
    /// both strings together. Keeping the stack on the heap lets that depth
    /// grow with the input instead of with the thread's call stack.
    fn run(mut self) -> Option<f64> {
        let mut pending = vec![(0, 0, 0.0)];

        while let Some((mut i, mut j, cost)) = pending.pop() {
            // The bound may have tightened since this branch was queued.
            if !self.admits(cost) {
                continue;
            }

            while i < self.a.len() && j < self.b.len() && self.a[i] == self.b[j] {
                i += 1;
                j += 1;
            }

            if i == self.a.len() && j == self.b.len() {
                self.best = cost;
                continue;
            }

            let model = self.model;
            let a_left = i < self.a.len();
            let b_left = j < self.b.len();

            // Pushed in reverse so replacement is explored first, then
            // insertion, then deletion. After the run skip, a[i] != b[j]
            // whenever both exist.
            if model.allow_deletion && a_left {
                let next = cost + model.deletion_cost;
                if self.admits(next) {
                    pending.push((i + 1, j, next));
                }
            }
            if model.allow_insertion && b_left {
                let next = cost + model.insertion_cost;
                if self.admits(next) {
                    pending.push((i, j + 1, next));
                }
            }
            if model.allow_replacement && a_left && b_left {
                let next = cost + model.replacement_cost;
                if self.admits(next) {
                    pending.push((i + 1, j + 1, next));
                }
            }
        }

        self.best.is_finite().then_some(self.best)
    }
}
