// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `pings.data` decoding: the latency matrix between servers.
//!
//! Latency is symmetric, so only the lower triangle is stored. Rows follow
//! the server list order: row `d` holds the latencies from servers `0..d` to
//! server `d`, one byte each. Row 0 is empty and takes no bytes.
//!
//! ```text
//! byte:  [ e e e m m m m m ]     e = exponent (3 bits), m = mantissa (5 bits)
//! value: (m << e) / 2 milliseconds
//! 0xFF:  no measurement
//! ```
//!
//! Half-millisecond resolution near zero, 64 ms steps near the 1920 ms top.
//! The stream has no header or length. Decoding stops wherever the bytes run
//! out, possibly mid-row.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Byte value meaning "this pair was never measured".
pub const NO_MEASUREMENT: u8 = 0xFF;

const MANTISSA_MASK: u8 = 0b0001_1111;
const EXPONENT_SHIFT: u8 = 5;

/// Decode one latency byte to milliseconds.
///
/// ```
/// use pingmap::assets::decode_latency;
///
/// assert_eq!(decode_latency(0x05), Some(2.5));
/// assert_eq!(decode_latency(0x25), Some(5.0));
/// assert_eq!(decode_latency(0xFF), None);
/// ```
pub fn decode_latency(byte: u8) -> Option<f64> {
    if byte == NO_MEASUREMENT {
        return None;
    }
    let mantissa = u32::from(byte & MANTISSA_MASK);
    let exponent = u32::from(byte >> EXPONENT_SHIFT);
    Some(f64::from(mantissa << exponent) / 2.0)
}

/// Lower-triangular latency matrix, indexed by server position.
#[derive(Debug, Clone, PartialEq)]
pub struct PingMatrix {
    rows: Vec<Vec<Option<f64>>>,
}

impl Default for PingMatrix {
    fn default() -> Self {
        Self {
            rows: vec![Vec::new()],
        }
    }
}

impl PingMatrix {
    /// Number of rows, i.e. servers covered (row 0 included).
    pub fn server_count(&self) -> usize {
        self.rows.len()
    }

    /// Latencies from servers `0..destination` to `destination`.
    pub fn row(&self, destination: usize) -> Option<&[Option<f64>]> {
        self.rows.get(destination).map(Vec::as_slice)
    }

    /// Latency between servers `a` and `b` in milliseconds.
    ///
    /// `None` if the pair was not measured, is out of range, or `a == b`.
    pub fn latency(&self, a: usize, b: usize) -> Option<f64> {
        let (destination, source) = match a.cmp(&b) {
            std::cmp::Ordering::Greater => (a, b),
            std::cmp::Ordering::Less => (b, a),
            std::cmp::Ordering::Equal => return None,
        };
        self.rows.get(destination)?.get(source).copied().flatten()
    }

    /// Every measured latency, row by row.
    pub fn latencies(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().flatten().filter_map(|l| *l)
    }

    /// Number of pairs with a measurement.
    pub fn measured_pairs(&self) -> usize {
        self.latencies().count()
    }

    /// True if the stream ended before the last row was complete.
    pub fn is_truncated(&self) -> bool {
        self.rows
            .last()
            .is_some_and(|row| row.len() < self.rows.len() - 1)
    }
}

/// Decode a ping matrix from raw bytes.
pub fn decode_pings(bytes: &[u8]) -> PingMatrix {
    let mut matrix = PingMatrix::default();
    let mut rest = bytes;
    let mut width = 1;

    while !rest.is_empty() {
        let (row, tail) = rest.split_at(width.min(rest.len()));
        matrix
            .rows
            .push(row.iter().copied().map(decode_latency).collect());
        rest = tail;
        width += 1;
    }

    matrix
}

/// Read and decode a ping matrix file.
pub fn load_pings(path: impl AsRef<Path>) -> Result<PingMatrix> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let matrix = decode_pings(&bytes);
    if matrix.is_truncated() {
        log::warn!(
            "{} ends mid-row; last row has partial data",
            path.display()
        );
    }
    log::info!(
        "loaded ping matrix for {} servers from {}",
        matrix.server_count(),
        path.display()
    );
    Ok(matrix)
}
