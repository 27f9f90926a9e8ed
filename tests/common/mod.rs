//! Shared test utilities and fixtures.

#![allow(dead_code)]

use pingmap::{CostModel, Server};

// ============================================================================
// SERVER FIXTURES
// ============================================================================

/// A small server list in the on-disk JSON format.
pub const SERVERS_JSON: &str = r#"[
    ["Amsterdam", "Netherlands", 0.51, 0.24],
    ["Frankfurt", "Germany", 0.52, 0.25],
    ["London", "United Kingdom", 0.49, 0.26],
    ["Los Angeles", "United States", 0.14, 0.35],
    ["New York City", "United States", 0.29, 0.31],
    ["Newark", "United States", 0.29, 0.31],
    ["Paris", "France", 0.50, 0.28],
    ["Sydney", "Australia", 0.93, 0.76],
    ["Tokyo", "Japan", 0.89, 0.37],
    ["Toronto", "Canada", 0.28, 0.29]
]"#;

/// The fixture list, decoded.
pub fn servers() -> Vec<Server> {
    pingmap::assets::parse_servers(SERVERS_JSON.as_bytes()).expect("fixture should parse")
}

/// Position of the server with this city in `servers`.
pub fn position_of(servers: &[Server], city: &str) -> usize {
    servers
        .iter()
        .position(|s| s.city == city)
        .unwrap_or_else(|| panic!("no server in {}", city))
}

/// Cities in ranked order.
pub fn ranked_cities(servers: &[Server], ranked: &[usize]) -> Vec<String> {
    ranked.iter().map(|&p| servers[p].city.clone()).collect()
}

// ============================================================================
// COST MODELS
// ============================================================================

/// Unit costs with a ceiling no test string can reach.
pub fn unbounded() -> CostModel {
    CostModel::new(1000.0)
}
