// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Decoders for the map's two data files.
//!
//! Fetching is someone else's job. These take bytes (or a local path) and
//! return plain values: the server list that search runs over, and the ping
//! matrix indexed by the same server positions.

mod pings;
mod servers;

pub use pings::{decode_latency, decode_pings, load_pings, PingMatrix, NO_MEASUREMENT};
pub use servers::{load_servers, parse_servers};
