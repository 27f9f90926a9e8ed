// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Display order for the server list: by country, then by city.
//!
//! Plain codepoint order, no locale collation. "Zürich" sorts after "Zug"
//! because 'ü' > 'g'; that is fine for a picker list.

use std::cmp::Ordering;

use crate::types::Server;

/// Compare two servers for display.
///
/// 1. **Country** - ascending
/// 2. **City** - ascending within a country
pub fn compare_servers(a: &Server, b: &Server) -> Ordering {
    a.country
        .cmp(&b.country)
        .then_with(|| a.city.cmp(&b.city))
}

/// Return a sorted copy of `servers`. Full ties keep their input order.
pub fn sort_servers(servers: &[Server]) -> Vec<Server> {
    let mut sorted = servers.to_vec();
    sorted.sort_by(compare_servers);
    sorted
}
