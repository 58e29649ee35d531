// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A compiled query: folded once, split into bitap-sized chunks, reused for
//! every field of every document.

use super::bitap::{pattern_alphabet, search, BitapOptions, PatternAlphabet, MAX_BITS};
use crate::types::MatchSpan;

#[derive(Debug, Clone)]
struct Chunk {
    chars: Vec<char>,
    alphabet: PatternAlphabet,
    start_index: usize,
}

/// Result of matching a compiled pattern against one field value.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternMatch {
    pub is_match: bool,
    /// 0 for an exact (whole value) match, otherwise in `[0.001, 1]`.
    pub score: f64,
    pub spans: Vec<MatchSpan>,
}

#[derive(Debug, Clone)]
pub struct BitapPattern {
    chars: Vec<char>,
    chunks: Vec<Chunk>,
    options: BitapOptions,
}

impl BitapPattern {
    /// Compile an already-folded pattern.
    ///
    /// Patterns longer than [`MAX_BITS`] are cut into full chunks; a remainder
    /// becomes one more chunk made of the last `MAX_BITS` chars.
    pub fn new(chars: Vec<char>, options: BitapOptions) -> Self {
        let mut chunks = Vec::new();
        let len = chars.len();

        let mut add_chunk = |start_index: usize, end: usize| {
            let slice = chars[start_index..end].to_vec();
            let alphabet = pattern_alphabet(&slice);
            chunks.push(Chunk {
                chars: slice,
                alphabet,
                start_index,
            });
        };

        if len > MAX_BITS {
            let remainder = len % MAX_BITS;
            let end = len - remainder;
            let mut i = 0;
            while i < end {
                add_chunk(i, i + MAX_BITS);
                i += MAX_BITS;
            }
            if remainder > 0 {
                add_chunk(len - MAX_BITS, len);
            }
        } else if len > 0 {
            add_chunk(0, len);
        }

        BitapPattern {
            chars,
            chunks,
            options,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Match against one folded field value.
    pub fn search_in(&self, text: &[char]) -> PatternMatch {
        if self.chunks.is_empty() {
            return PatternMatch {
                is_match: false,
                score: 1.0,
                spans: Vec::new(),
            };
        }

        if self.chars == text {
            let spans = if self.options.include_matches && !text.is_empty() {
                vec![MatchSpan::new(0, text.len() - 1)]
            } else {
                Vec::new()
            };
            return PatternMatch {
                is_match: true,
                score: 0.0,
                spans,
            };
        }

        let mut spans = Vec::new();
        let mut total_score = 0.0;
        let mut has_matches = false;

        for chunk in &self.chunks {
            let options = BitapOptions {
                location: self.options.location + chunk.start_index,
                ..self.options
            };
            let result = search(text, &chunk.chars, &chunk.alphabet, &options);
            if result.is_match {
                has_matches = true;
                spans.extend(result.spans);
            }
            total_score += result.score;
        }

        if !has_matches {
            return PatternMatch {
                is_match: false,
                score: 1.0,
                spans: Vec::new(),
            };
        }

        PatternMatch {
            is_match: true,
            score: total_score / self.chunks.len() as f64,
            spans: merge_spans(spans),
        }
    }
}

/// Sort spans and fuse the ones that overlap or touch.
fn merge_spans(mut spans: Vec<MatchSpan>) -> Vec<MatchSpan> {
    spans.sort_unstable();
    let mut merged: Vec<MatchSpan> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end + 1 => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
    }
    merged
}
