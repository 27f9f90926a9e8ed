// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records that get searched, and what search hands back.
//!
//! The search layer never looks at a record's payload. It only needs one
//! normalized comparison string per record, exposed through [`Indexed`], and
//! it returns positions rather than values so callers keep their own records.
//!
//! # Invariants
//!
//! - **Server**: `index == normalize(city + country)`. Build servers with
//!   [`Server::new`] and this holds automatically.
//! - **Match**: `position < candidates.len()` for the slice that produced it.

use serde::Serialize;

use crate::util::normalize::normalize;

/// Anything with a normalized comparison string.
///
/// The string must already be normalized with [`normalize`]; search only
/// normalizes the query.
pub trait Indexed {
    fn index(&self) -> &str;
}

impl Indexed for String {
    fn index(&self) -> &str {
        self
    }
}

impl Indexed for str {
    fn index(&self) -> &str {
        self
    }
}

impl<T: Indexed + ?Sized> Indexed for &T {
    fn index(&self) -> &str {
        (**self).index()
    }
}

/// A ping server: where it is and how to find it by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Server {
    pub city: String,
    pub country: String,
    /// `normalize(city + country)`
    pub index: String,
    /// Horizontal map coordinate.
    pub x: f64,
    /// Vertical map coordinate.
    pub y: f64,
}

impl Server {
    pub fn new(city: impl Into<String>, country: impl Into<String>, x: f64, y: f64) -> Self {
        let city = city.into();
        let country = country.into();
        let index = normalize(&format!("{}{}", city, country));
        Self {
            city,
            country,
            index,
            x,
            y,
        }
    }
}

impl Indexed for Server {
    fn index(&self) -> &str {
        &self.index
    }
}

/// One ranked candidate: its position in the input and how far it is from the query.
///
/// Substring hits and fuzzy hits share the same axis. Substring distances are
/// multiples of the substring weight (0.01 by default), fuzzy distances start
/// at the insertion cost (0.1 by default).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Match {
    pub position: usize,
    pub distance: f64,
}
