//! Misspelled queries against the fixture server list.
//!
//! On the fuzzy path a missing letter costs 0.1 and anything else costs 1,
//! so the distances below are 0.1 per unmatched label letter plus 1 per
//! wrong query letter.

use super::common::{position_of, servers};
use pingmap::{find_results, find_results_with, rank, SearchOptions};

fn assert_single_hit(query: &str, city: &str, distance: f64) {
    let servers = servers();
    let matches = rank(query, &servers, &SearchOptions::default()).unwrap();
    assert_eq!(matches.len(), 1, "{:?} matched {:?}", query, matches);
    assert_eq!(matches[0].position, position_of(&servers, city));
    assert!(
        (matches[0].distance - distance).abs() < 1e-9,
        "{:?}: {} != {}",
        query,
        matches[0].distance,
        distance
    );
}

#[test]
fn test_dropped_letter() {
    // LONDN is LONDONUNITEDKINGDOM with 14 letters missing
    assert_single_hit("londn", "London", 1.4);
    assert_single_hit("Amsterdm", "Amsterdam", 1.2);
    assert_single_hit("tornto", "Toronto", 0.7);
}

#[test]
fn test_wrong_letter() {
    // I for Y, then nine missing letters
    assert_single_hit("sidney", "Sydney", 1.9);
}

#[test]
fn test_swapped_letters() {
    // Dropping the U is cheaper than two replacements.
    assert_single_hit("frankfrut", "Frankfurt", 1.8);
}

#[test]
fn test_punctuation_and_case_are_ignored() {
    let servers = servers();
    assert_eq!(
        find_results("new-york CITY!", &servers),
        vec![position_of(&servers, "New York City")]
    );
}

#[test]
fn test_wrong_letter_skipped_by_insertions() {
    // LOSANGELAS threads through LOSANGEL(ES)(UNITEDST)A(TE)S: twelve
    // missing letters and no wrong one.
    assert_single_hit("los angelas", "Los Angeles", 1.2);
}

#[test]
fn test_long_labels_hit_the_ceiling() {
    let servers = servers();
    // The second O has nothing to match after LOSANGEL, so it costs 1 on top
    // of twelve missing letters: 2.2, over the cap of 2.
    assert!(find_results("los angelos", &servers).is_empty());

    let lenient = SearchOptions {
        max_cost_cap: 3.0,
        ..SearchOptions::default()
    };
    let matches = rank("los angelos", &servers, &lenient).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].position, position_of(&servers, "Los Angeles"));
    assert!((matches[0].distance - 2.2).abs() < 1e-9);
    assert_eq!(
        find_results_with("los angelos", &servers, &lenient).unwrap(),
        vec![position_of(&servers, "Los Angeles")]
    );
}
