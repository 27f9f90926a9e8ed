// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility modules for string processing.
//!
//! Only normalization lives here for now. It is shared by the search layer
//! (queries) and the asset decoders (server indices), which must agree on it.

pub mod normalize;
