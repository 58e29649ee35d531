// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bit-parallel approximate matching (bitap, Wu-Manber flavour).
//!
//! Each pattern char gets a bitmask of the positions it occupies. Scanning the
//! text right to left, one `u64` per text position tracks which pattern prefixes
//! end there with at most `k` edits; row `k` is derived from row `k - 1`. The
//! first row that reaches the top bit is the match, and its error count feeds the
//! score.
//!
//! # Score
//!
//! ```text
//! score = errors / pattern_len + |expected_location - location| / distance
//! ```
//!
//! Lower is better. A match is accepted when its score is within the threshold,
//! and the threshold tightens every time a better location turns up, so later
//! rows only look for strictly better candidates.

use crate::types::MatchSpan;
use std::collections::HashMap;

/// Longest pattern a single bitap pass handles. Longer patterns are chunked.
pub const MAX_BITS: usize = 32;

/// Floor for the score of a non-exact match, keeping it distinct from exact (0).
pub const MIN_FUZZY_SCORE: f64 = 0.001;

/// Per-char position masks for one pattern chunk.
pub type PatternAlphabet = HashMap<char, u64>;

/// Build the position masks: bit `len - 1 - i` is set for the char at index `i`.
pub fn pattern_alphabet(pattern: &[char]) -> PatternAlphabet {
    let len = pattern.len();
    let mut alphabet = PatternAlphabet::with_capacity(len);
    for (i, &c) in pattern.iter().enumerate() {
        *alphabet.entry(c).or_insert(0) |= 1u64 << (len - i - 1);
    }
    alphabet
}

/// Knobs for a single bitap pass.
#[derive(Debug, Clone, Copy)]
pub struct BitapOptions {
    pub location: usize,
    pub distance: usize,
    pub threshold: f64,
    pub find_all_matches: bool,
    pub min_match_char_length: usize,
    pub include_matches: bool,
    pub ignore_location: bool,
}

/// Outcome of a bitap pass over one text.
#[derive(Debug, Clone, PartialEq)]
pub struct BitapMatch {
    pub is_match: bool,
    pub score: f64,
    /// Only filled when `include_matches` is set.
    pub spans: Vec<MatchSpan>,
}

/// Score a candidate: error ratio plus proximity penalty.
pub fn compute_score(
    pattern_len: usize,
    errors: usize,
    current_location: usize,
    expected_location: usize,
    distance: usize,
    ignore_location: bool,
) -> f64 {
    let accuracy = errors as f64 / pattern_len as f64;
    if ignore_location {
        return accuracy;
    }
    let proximity = current_location.abs_diff(expected_location);
    if distance == 0 {
        return if proximity > 0 { 1.0 } else { accuracy };
    }
    accuracy + proximity as f64 / distance as f64
}

/// Collapse a per-char match mask into runs of at least `min_len` chars.
pub fn mask_to_spans(mask: &[bool], min_len: usize) -> Vec<MatchSpan> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &hit) in mask.iter().enumerate() {
        match (hit, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                if i - s >= min_len {
                    spans.push(MatchSpan::new(s, i - 1));
                }
                start = None;
            }
            _ => {}
        }
    }

    if let Some(s) = start {
        if mask.len() - s >= min_len {
            spans.push(MatchSpan::new(s, mask.len() - 1));
        }
    }

    spans
}

fn find_from(text: &[char], pattern: &[char], from: usize) -> Option<usize> {
    if pattern.is_empty() || from >= text.len() {
        return None;
    }
    text[from..]
        .windows(pattern.len())
        .position(|window| window == pattern)
        .map(|pos| pos + from)
}

/// Run bitap for `pattern` (at most [`MAX_BITS`] chars) over `text`.
///
/// Both inputs must already be folded the same way.
pub fn search(
    text: &[char],
    pattern: &[char],
    alphabet: &PatternAlphabet,
    options: &BitapOptions,
) -> BitapMatch {
    let pattern_len = pattern.len();
    let text_len = text.len();
    debug_assert!(pattern_len > 0 && pattern_len <= MAX_BITS);

    let score_at = |errors: usize, location: usize, expected: usize| {
        compute_score(
            pattern_len,
            errors,
            location,
            expected,
            options.distance,
            options.ignore_location,
        )
    };

    let expected = options.location.min(text_len);
    let mut threshold = options.threshold;
    let compute_matches = options.min_match_char_length > 1 || options.include_matches;
    let mut match_mask = if compute_matches {
        vec![false; text_len]
    } else {
        Vec::new()
    };

    // Exact occurrences first: they tighten the threshold before the fuzzy rows run.
    let mut from = expected;
    while let Some(index) = find_from(text, pattern, from) {
        threshold = threshold.min(score_at(0, index, expected));
        from = index + pattern_len;
        if compute_matches {
            match_mask[index..index + pattern_len].fill(true);
        }
    }

    let mut best_location: Option<usize> = None;
    let mut last_row: Vec<u64> = Vec::new();
    let mut final_score = 1.0;
    let mut bin_max = pattern_len + text_len;
    let top_bit = 1u64 << (pattern_len - 1);

    for errors in 0..pattern_len {
        // Binary search for how far from `expected` a match with this many
        // errors can sit and still beat the threshold.
        let mut bin_min = 0;
        let mut bin_mid = bin_max;
        while bin_min < bin_mid {
            if score_at(errors, expected + bin_mid, expected) <= threshold {
                bin_min = bin_mid;
            } else {
                bin_max = bin_mid;
            }
            bin_mid = (bin_max - bin_min) / 2 + bin_min;
        }
        bin_max = bin_mid;

        let mut start = (expected + 1).saturating_sub(bin_mid).max(1);
        let finish = if options.find_all_matches {
            text_len
        } else {
            (expected + bin_mid).min(text_len) + pattern_len
        };

        let mut row = vec![0u64; finish + 2];
        row[finish + 1] = (1u64 << errors) - 1;

        let mut j = finish;
        while j >= start {
            let location = j - 1;
            let char_match = text
                .get(location)
                .and_then(|c| alphabet.get(c))
                .copied()
                .unwrap_or(0);

            if compute_matches && location < text_len {
                match_mask[location] = char_match != 0;
            }

            // Exact-match transition.
            row[j] = ((row[j + 1] << 1) | 1) & char_match;

            // Substitution, insertion, deletion from the previous error row.
            if errors > 0 {
                let prev_here = last_row.get(j).copied().unwrap_or(0);
                let prev_next = last_row.get(j + 1).copied().unwrap_or(0);
                row[j] |= ((prev_next | prev_here) << 1) | 1 | prev_next;
            }

            if row[j] & top_bit != 0 {
                final_score = score_at(errors, location, expected);
                if final_score <= threshold {
                    threshold = final_score;
                    best_location = Some(location);
                    if location <= expected {
                        break;
                    }
                    // Past the expected spot: no point scanning further left
                    // than the mirror image of this hit.
                    start = (2 * expected).saturating_sub(location).max(1);
                }
            }

            j -= 1;
        }

        // One more error can't beat what we have.
        if score_at(errors + 1, expected, expected) > threshold {
            break;
        }
        last_row = row;
    }

    let mut result = BitapMatch {
        is_match: best_location.is_some(),
        score: final_score.max(MIN_FUZZY_SCORE),
        spans: Vec::new(),
    };

    if compute_matches {
        let spans = mask_to_spans(&match_mask, options.min_match_char_length);
        if spans.is_empty() {
            result.is_match = false;
        } else if options.include_matches {
            result.spans = spans;
        }
    }

    result
}
