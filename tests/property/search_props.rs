//! Property tests for the ranking layer.

use pingmap::search::SearchOptions;
use pingmap::{edit_distance, find_results, normalize, rank};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Normalized candidate indices, short enough that any substring hit
/// (slack of at most 7 at 0.01 each) beats any fuzzy hit (at least 0.1).
fn index_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-E]{1,8}").unwrap()
}

fn candidates_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(index_strategy(), 0..12)
}

/// Raw queries: mixed case, spaces and punctuation the normalizer drops.
fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-eA-E .-]{0,8}").unwrap()
}

proptest! {
    /// Property: output is a set of valid positions.
    #[test]
    fn prop_positions_unique_and_in_range(
        query in query_strategy(),
        candidates in candidates_strategy(),
    ) {
        let ranked = find_results(&query, &candidates);
        let mut seen = vec![false; candidates.len()];
        for &p in &ranked {
            prop_assert!(p < candidates.len());
            prop_assert!(!seen[p], "position {} returned twice", p);
            seen[p] = true;
        }
    }

    /// Property: distances come out sorted ascending.
    #[test]
    fn prop_distances_ascending(
        query in query_strategy(),
        candidates in candidates_strategy(),
    ) {
        let matches = rank(&query, &candidates, &SearchOptions::default()).unwrap();
        for pair in matches.windows(2) {
            prop_assert!(pair[0].distance <= pair[1].distance);
        }
    }

    /// Property: a candidate is returned exactly when it contains the query or
    /// is within its fuzzy ceiling.
    #[test]
    fn prop_membership_matches_definition(
        query in query_strategy(),
        candidates in candidates_strategy(),
    ) {
        let options = SearchOptions::default();
        let normalized = normalize(&query);
        let ranked = find_results(&query, &candidates);

        for (position, index) in candidates.iter().enumerate() {
            let expected = index.contains(normalized.as_str())
                || edit_distance(
                    &normalized,
                    index,
                    &options.cost_model_for(index.chars().count()),
                )
                .unwrap()
                .is_some();
            prop_assert_eq!(ranked.contains(&position), expected, "index {:?}", index);
        }
    }

    /// Property: substring hits rank above every fuzzy hit.
    #[test]
    fn prop_substring_hits_first(
        query in query_strategy(),
        candidates in candidates_strategy(),
    ) {
        let normalized = normalize(&query);
        let ranked = find_results(&query, &candidates);
        let hits: Vec<bool> = ranked
            .iter()
            .map(|&p| candidates[p].contains(normalized.as_str()))
            .collect();
        // Once a fuzzy hit appears, no substring hit may follow.
        if let Some(first_fuzzy) = hits.iter().position(|&h| !h) {
            prop_assert!(hits[first_fuzzy..].iter().all(|&h| !h));
        }
    }

    /// Property: a candidate equal to the normalized query ranks first.
    #[test]
    fn prop_exact_candidate_ranks_first(
        candidates in prop::collection::vec(index_strategy(), 1..12),
        pick in any::<prop::sample::Index>(),
    ) {
        let target = pick.get(&candidates).clone();
        let query = target.to_lowercase();
        let ranked = find_results(&query, &candidates);
        prop_assert!(!ranked.is_empty());
        prop_assert_eq!(&candidates[ranked[0]], &target);
    }
}
