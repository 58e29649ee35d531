// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind document scores.
//!
//! # Combining fields
//!
//! ```text
//! doc_score = Π  s_f ^ (w_f × n_f)      over every matched field f
//! ```
//!
//! - `s_f` is the field's bitap score in `[0.001, 1]`, or `ε` for an exact match
//!   (zero would wipe out the whole product, so exact matches become tiny instead).
//! - `w_f` is the key weight after normalization (all weights sum to 1).
//! - `n_f` is the field norm `1/sqrt(tokens)`, so a hit in a three-word title
//!   counts more than the same hit in a two-thousand-word body.
//!
//! Since every factor is `<= 1`, a larger exponent pulls the factor down, which
//! is why a heavier field ranks higher for the same bitap score.

use crate::options::SearchKey;
use crate::utils::token_count;

/// Stand-in for a zero score inside the product.
pub const EXACT_MATCH_SCORE: f64 = f64::EPSILON;

/// Decimal places kept on a field norm.
const NORM_MANTISSA: i32 = 3;

/// Field-length norm: `1 / sqrt(token_count)`, rounded to 3 decimals.
///
/// A value without tokens (whitespace only) gets a norm of 1.
pub fn field_norm(value: &str) -> f64 {
    let tokens = token_count(value);
    if tokens == 0 {
        return 1.0;
    }
    let scale = 10f64.powi(NORM_MANTISSA);
    ((1.0 / (tokens as f64).sqrt()) * scale).round() / scale
}

/// Scale key weights so they sum to 1.
pub fn normalize_weights(keys: &[SearchKey]) -> Vec<f64> {
    let total: f64 = keys.iter().map(|k| k.weight).sum();
    if total <= 0.0 {
        return vec![0.0; keys.len()];
    }
    keys.iter().map(|k| k.weight / total).collect()
}

/// One factor of the document score.
pub fn field_factor(score: f64, weight: f64, norm: f64, ignore_field_norm: bool) -> f64 {
    let base = if score == 0.0 && weight > 0.0 {
        EXACT_MATCH_SCORE
    } else {
        score
    };
    let exponent = weight * if ignore_field_norm { 1.0 } else { norm };
    base.powf(exponent)
}

/// Combine `(score, weight, norm)` triples into the document score.
pub fn document_score<I>(fields: I, ignore_field_norm: bool) -> f64
where
    I: IntoIterator<Item = (f64, f64, f64)>,
{
    fields
        .into_iter()
        .map(|(score, weight, norm)| field_factor(score, weight, norm, ignore_field_norm))
        .product()
}
