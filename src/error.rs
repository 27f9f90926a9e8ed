// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for pingmap.
//!
//! Two kinds of failure exist. Configuration errors (a negative or non-finite
//! cost) are caught before any comparison work starts. Asset errors come from
//! decoding the server list or reading files. "No match" is never an error:
//! the edit distance reports it as `Ok(None)`.

use std::io;

use thiserror::Error;

/// The error type for every fallible pingmap operation.
#[derive(Error, Debug)]
pub enum Error {
    /// A cost, ceiling, or search tunable is negative or not finite.
    #[error("invalid value for {option}: {value}")]
    InvalidArgument { option: &'static str, value: f64 },

    /// The server list parsed as JSON but does not have the expected shape.
    #[error("malformed server list at position {position}: {reason}")]
    MalformedServerList { position: usize, reason: String },

    /// The server list is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading an asset file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for operations that may fail with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid-argument error for a named option.
    pub fn invalid_argument(option: &'static str, value: f64) -> Self {
        Error::InvalidArgument { option, value }
    }

    /// Create a malformed-server-list error for the row at `position`.
    pub fn malformed<S: Into<String>>(position: usize, reason: S) -> Self {
        Error::MalformedServerList {
            position,
            reason: reason.into(),
        }
    }

    /// True for configuration errors.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }
}

/// Check that a configured cost is finite and non-negative.
pub(crate) fn check_cost(option: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_argument(option, value))
    }
}
