// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via bitap.
//!
//! `bitap` is the raw bit-parallel matcher for one pattern of up to 32 chars.
//! `pattern` wraps it into a compiled query that handles long patterns and the
//! whole-value exact shortcut.

pub mod bitap;
mod pattern;

pub use bitap::{BitapMatch, BitapOptions, MAX_BITS};
pub use pattern::{BitapPattern, PatternMatch};
