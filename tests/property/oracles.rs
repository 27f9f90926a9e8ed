//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations to check the branch-and-bound
//! search against. The search has to agree with them on the minimal cost;
//! how it gets there is its own business.

use pingmap::CostModel;

/// Weighted Wagner-Fischer over chars.
///
/// Disabled operations cost infinity. Equal characters match for free and
/// replacement is only offered for unequal ones. Returns the exact minimum,
/// ignoring `max_cost`.
pub fn oracle_weighted(a: &str, b: &str, model: &CostModel) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let insertion = if model.allow_insertion {
        model.insertion_cost
    } else {
        f64::INFINITY
    };
    let deletion = if model.allow_deletion {
        model.deletion_cost
    } else {
        f64::INFINITY
    };
    let replacement = if model.allow_replacement {
        model.replacement_cost
    } else {
        f64::INFINITY
    };

    // dp[i][j] = cost of turning a[..i] into b[..j]
    let mut dp = vec![vec![f64::INFINITY; b.len() + 1]; a.len() + 1];
    dp[0][0] = 0.0;
    for i in 0..=a.len() {
        for j in 0..=b.len() {
            let here = dp[i][j];
            if here.is_infinite() {
                continue;
            }
            if i < a.len() && j < b.len() {
                let step = if a[i] == b[j] { 0.0 } else { replacement };
                dp[i + 1][j + 1] = dp[i + 1][j + 1].min(here + step);
            }
            if j < b.len() {
                dp[i][j + 1] = dp[i][j + 1].min(here + insertion);
            }
            if i < a.len() {
                dp[i + 1][j] = dp[i + 1][j].min(here + deletion);
            }
        }
    }

    dp[a.len()][b.len()]
}

/// The oracle with the ceiling applied, shaped like `edit_distance`.
pub fn oracle_bounded(a: &str, b: &str, model: &CostModel) -> Option<f64> {
    let d = oracle_weighted(a, b, model);
    (d <= model.max_cost).then_some(d)
}
