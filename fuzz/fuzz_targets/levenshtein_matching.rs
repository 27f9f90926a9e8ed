// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the bounded edit distance.
//!
//! Verifies that the search never reports a cost above the ceiling, that the
//! identity and symmetry laws hold, and that a bigger ceiling never loses a
//! match. The search prunes hard. If pruning cuts the wrong branch, users
//! stop finding servers they misspelled.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pingmap::{edit_distance, CostModel};

/// Fuzz input for edit distance matching
#[derive(Debug, Arbitrary)]
struct MatchInput {
    query: String,
    target: String,
    /// Ceiling in quarter units, so sums stay exact
    max_quarters: u8,
    insertion_quarters: u8,
    deletion_quarters: u8,
    replacement_quarters: u8,
    disabled: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let query: String = input.query.chars().take(12).collect();
    let target: String = input.target.chars().take(24).collect();

    let quarter = |q: u8| f64::from(q % 16) / 4.0;
    let mut model = CostModel::new(quarter(input.max_quarters))
        .with_insertion_cost(quarter(input.insertion_quarters))
        .with_deletion_cost(quarter(input.deletion_quarters))
        .with_replacement_cost(quarter(input.replacement_quarters));
    model.allow_insertion = input.disabled & 1 == 0;
    model.allow_deletion = input.disabled & 2 == 0;
    model.allow_replacement = input.disabled & 4 == 0;

    let result = edit_distance(&query, &target, &model).expect("valid model");

    // INVARIANT 1: a reported cost fits under the ceiling
    if let Some(distance) = result {
        assert!(
            distance >= 0.0 && distance <= model.max_cost,
            "distance {} outside [0, {}] for query={:?}, target={:?}",
            distance,
            model.max_cost,
            query,
            target
        );
    }

    // INVARIANT 2: identity
    assert_eq!(edit_distance(&query, &query, &model).expect("valid model"), Some(0.0));

    // INVARIANT 3: symmetry when insertion and deletion are interchangeable
    if model.allow_insertion == model.allow_deletion && model.insertion_cost == model.deletion_cost {
        let reverse = edit_distance(&target, &query, &model).expect("valid model");
        assert_eq!(result, reverse, "asymmetric for {:?} / {:?}", query, target);
    }

    // INVARIANT 4: a bigger ceiling keeps the match and its cost
    if let Some(distance) = result {
        let raised = CostModel {
            max_cost: model.max_cost + 4.0,
            ..model
        };
        assert_eq!(
            edit_distance(&query, &target, &raised).expect("valid model"),
            Some(distance)
        );
    }
});
