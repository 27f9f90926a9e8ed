//! Typo-tolerant server search for a ping latency map.
//!
//! The map shows a few hundred servers. Users type a city or country, badly,
//! and expect the right server near the top. This crate does that ranking,
//! plus decoding of the two data files the map runs on.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │  normalize   │────▶│    fuzzy      │────▶│    search    │
//! │ (A-Z only)   │     │ (edit_distance│     │ (find_results│
//! │              │     │  CostModel)   │     │  rank)       │
//! └──────────────┘     └───────────────┘     └──────────────┘
//!        │                                           ▲
//!        ▼                                           │
//! ┌──────────────┐     ┌───────────────┐             │
//! │    assets    │────▶│  types::Server│─────────────┘
//! │ (servers.json│     │  (Indexed)    │
//! │  pings.data) │     └───────────────┘
//! └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use pingmap::{find_results, Server};
//!
//! let servers = vec![
//!     Server::new("London", "United Kingdom", 0.49, 0.26),
//!     Server::new("Londrina", "Brazil", 0.33, 0.71),
//!     Server::new("Lyon", "France", 0.50, 0.30),
//! ];
//!
//! // London contains the query; Londrina is a fuzzy hit; Lyon is too far off.
//! assert_eq!(find_results("london", &servers), vec![0, 1]);
//! ```

pub mod assets;
pub mod error;
mod fuzzy;
pub mod search;
mod sort;
mod types;
mod util;

// Re-exports for public API
pub use error::{Error, Result};
pub use fuzzy::{edit_distance, CostModel};
pub use search::{find_results, find_results_with, rank, SearchOptions};
pub use sort::{compare_servers, sort_servers};
pub use types::{Indexed, Match, Server};
pub use util::normalize::normalize;
