// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at the search API to verify it never panics,
//! never returns invalid positions, and never breaks the substring-first
//! ordering. If the search box crashes on emoji or null bytes, you have a bad day.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pingmap::{normalize, rank, SearchOptions, Server};

/// The search must survive whatever users throw at it.
fuzz_target!(|query: &[u8]| {
    static SERVERS: std::sync::OnceLock<Vec<Server>> = std::sync::OnceLock::new();
    let servers = SERVERS.get_or_init(|| {
        vec![
            Server::new("Amsterdam", "Netherlands", 0.51, 0.24),
            Server::new("London", "United Kingdom", 0.49, 0.26),
            Server::new("New York City", "United States", 0.29, 0.31),
            Server::new("Newark", "United States", 0.29, 0.31),
            Server::new("São Paulo", "Brazil", 0.36, 0.70),
            Server::new("Tokyo", "Japan", 0.89, 0.37),
            Server::new("", "", 0.0, 0.0),
        ]
    });

    // Convert to string, handling invalid UTF-8
    let query = String::from_utf8_lossy(query);
    let query: String = query.chars().take(64).collect();

    let matches = rank(&query, servers, &SearchOptions::default()).expect("default options");

    // INVARIANT 1: positions are in range and unique
    let mut seen = vec![false; servers.len()];
    for m in &matches {
        assert!(m.position < servers.len());
        assert!(!seen[m.position], "position {} returned twice", m.position);
        seen[m.position] = true;
    }

    // INVARIANT 2: sorted ascending by distance
    for pair in matches.windows(2) {
        assert!(pair[0].distance <= pair[1].distance);
    }

    // INVARIANT 3: substring hits come before fuzzy hits.
    // Holds for this list only: no label is one or two insertions away from
    // a query that also sits in a label with ten or more letters to spare.
    let normalized = normalize(&query);
    let mut fuzzy_seen = false;
    for m in &matches {
        let is_substring = servers[m.position].index.contains(normalized.as_str());
        assert!(!(fuzzy_seen && is_substring), "substring hit after fuzzy hit");
        fuzzy_seen |= !is_substring;
    }
});
