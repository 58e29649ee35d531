// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Per-field bitap scores are folded into one document score by raising each to
//! its weight (times the field norm) and multiplying. Every factor is in
//! `(0, 1]`, so more matched fields and heavier fields both push the score
//! towards zero, and zero is best.

mod core;
pub mod ranking;

pub use self::core::*;
