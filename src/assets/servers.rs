// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `servers.json` decoding.
//!
//! The file is a JSON array of rows, one per server:
//!
//! ```text
//! [
//!   ["London", "United Kingdom", 0.4962, 0.2614],
//!   ["Tokyo", "Japan", 0.8871, 0.3702]
//! ]
//! ```
//!
//! `[city, country, x, y]`, with any trailing elements ignored. The row order
//! matters: a server's position in this list is its row/column in the ping
//! matrix. One bad row rejects the whole file.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::Server;

/// Decode a server list from raw JSON bytes.
pub fn parse_servers(bytes: &[u8]) -> Result<Vec<Server>> {
    let body: Value = serde_json::from_slice(bytes)?;
    let rows = body
        .as_array()
        .ok_or_else(|| Error::malformed(0, "top level is not an array"))?;

    rows.iter()
        .enumerate()
        .map(|(position, row)| parse_row(position, row))
        .collect()
}

/// Read and decode a server list file.
pub fn load_servers(path: impl AsRef<Path>) -> Result<Vec<Server>> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let servers = parse_servers(&bytes)?;
    log::info!("loaded {} servers from {}", servers.len(), path.display());
    Ok(servers)
}

fn parse_row(position: usize, row: &Value) -> Result<Server> {
    let fields = row
        .as_array()
        .ok_or_else(|| Error::malformed(position, "row is not an array"))?;

    let city = fields
        .first()
        .and_then(Value::as_str)
        .ok_or_else(|| Error::malformed(position, "city must be a string"))?;
    let country = fields
        .get(1)
        .and_then(Value::as_str)
        .ok_or_else(|| Error::malformed(position, "country must be a string"))?;
    let x = fields
        .get(2)
        .and_then(Value::as_f64)
        .ok_or_else(|| Error::malformed(position, "x must be a number"))?;
    let y = fields
        .get(3)
        .and_then(Value::as_f64)
        .ok_or_else(|| Error::malformed(position, "y must be a number"))?;

    if fields.len() > 4 {
        log::debug!(
            "server {} ({}) has {} extra fields, ignoring them",
            position,
            city,
            fields.len() - 4
        );
    }

    Ok(Server::new(city, country, x, y))
}
