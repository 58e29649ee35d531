// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search index: built once from a corpus snapshot, queried many times.
//!
//! # Lifecycle
//!
//! ```text
//! SearchIndex::empty()  ──build()──▶  built  ──search()…──▶  dropped / rebuilt
//!   (not ready: every                 (immutable, Send + Sync)
//!    query returns [])
//! ```
//!
//! The index owns an `Arc` of the corpus it was built from, so results hand out
//! documents without copying them. Nothing is ever patched in place: a new
//! corpus means a new index.
//!
//! # Query pipeline
//!
//! 1. Trim the query. Shorter than `min_match_char_length` → no results.
//! 2. Fold and compile it into a bitap pattern (once per query).
//! 3. For every document, run the pattern against every value of every key.
//! 4. Documents with at least one matching value get a combined score.
//! 5. Stable-sort ascending by score, ties in corpus order, cut to `limit`.

mod record;

use crate::corpus::Corpus;
use crate::error::ConfigError;
use crate::fuzzy::{BitapOptions, BitapPattern};
use crate::options::{SearchOptions, SUGGESTION_LIMIT};
use crate::scoring::ranking::rank;
use crate::scoring::{document_score, normalize_weights};
use crate::types::{FieldMatch, MatchSpan, SearchResult};
use crate::utils::{fold_chars, Folding};
use record::{field_text, IndexedRecord};
use std::sync::Arc;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone)]
pub struct SearchIndex {
    corpus: Arc<Corpus>,
    options: SearchOptions,
    /// Key weights scaled to sum to 1, parallel to `options.keys`.
    weights: Vec<f64>,
    records: Vec<IndexedRecord>,
    built: bool,
}

impl SearchIndex {
    /// An index that hasn't been built. Every query returns nothing.
    pub fn empty(options: SearchOptions) -> Self {
        SearchIndex {
            corpus: Arc::new(Corpus::empty()),
            weights: normalize_weights(&options.keys),
            options,
            records: Vec::new(),
            built: false,
        }
    }

    /// Build an index over `corpus`. An empty corpus is fine.
    pub fn build(
        corpus: impl Into<Arc<Corpus>>,
        options: SearchOptions,
    ) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self::build_validated(corpus.into(), options))
    }

    /// Replace this index with one built from `corpus`, keeping the options.
    ///
    /// The new index is fully built before it replaces the old one.
    pub fn rebuild(&mut self, corpus: impl Into<Arc<Corpus>>) {
        *self = Self::build_validated(corpus.into(), self.options.clone());
    }

    pub(crate) fn build_validated(corpus: Arc<Corpus>, options: SearchOptions) -> Self {
        let folding = folding(&options);
        let keys = &options.keys;

        #[cfg(feature = "parallel")]
        let records: Vec<IndexedRecord> = corpus
            .documents()
            .par_iter()
            .map(|doc| IndexedRecord::build(doc, keys, folding))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let records: Vec<IndexedRecord> = corpus
            .documents()
            .iter()
            .map(|doc| IndexedRecord::build(doc, keys, folding))
            .collect();

        debug!(
            documents = records.len(),
            values = records.iter().map(IndexedRecord::value_count).sum::<usize>(),
            keys = keys.len(),
            "built search index"
        );

        SearchIndex {
            weights: normalize_weights(keys),
            corpus,
            options,
            records,
            built: true,
        }
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ranked matches for `query`, at most `limit` of them (`0` means the
    /// configured default).
    ///
    /// Never fails: an unbuilt index, a too-short query, or a query that
    /// matches nothing all give an empty list.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        if !self.built {
            trace!("search before build");
            return Vec::new();
        }
        let Some(pattern) = self.compile(query) else {
            return Vec::new();
        };

        let mut results: Vec<SearchResult> = self
            .records
            .iter()
            .enumerate()
            .filter_map(|(ref_index, record)| self.match_record(ref_index, record, &pattern))
            .collect();

        let matched = results.len();
        rank(&mut results, self.options.effective_limit(limit));
        trace!(query, matched, returned = results.len(), "search");
        results
    }

    /// Type-ahead suggestions: the top few results.
    pub fn suggestions(&self, query: &str) -> Vec<SearchResult> {
        self.search(query, SUGGESTION_LIMIT)
    }

    fn compile(&self, query: &str) -> Option<BitapPattern> {
        let trimmed = query.trim();
        if trimmed.chars().count() < self.options.min_match_char_length {
            return None;
        }
        let chars = fold_chars(trimmed, folding(&self.options));
        Some(BitapPattern::new(chars, bitap_options(&self.options)))
    }

    fn match_record(
        &self,
        ref_index: usize,
        record: &IndexedRecord,
        pattern: &BitapPattern,
    ) -> Option<SearchResult> {
        let doc = self.corpus.get(ref_index)?;
        let include_matches = self.options.include_matches;

        let mut factors = Vec::new();
        let mut matches = Vec::new();

        for ((key, weight), values) in self
            .options
            .keys
            .iter()
            .zip(&self.weights)
            .zip(&record.fields)
        {
            for value in values {
                let hit = pattern.search_in(&value.chars);
                if !hit.is_match {
                    continue;
                }
                factors.push((hit.score, *weight, value.norm));
                if include_matches {
                    matches.push(FieldMatch {
                        field: key.field,
                        element: value.element,
                        value: field_text(doc, key.field, value.element).to_string(),
                        score: hit.score,
                        norm: value.norm,
                        spans: hit
                            .spans
                            .into_iter()
                            .map(|s| MatchSpan::new(s.start + value.offset, s.end + value.offset))
                            .collect(),
                    });
                }
            }
        }

        if factors.is_empty() {
            return None;
        }

        Some(SearchResult {
            document: Arc::clone(doc),
            ref_index,
            score: document_score(factors, self.options.ignore_field_norm),
            matches: include_matches.then_some(matches),
        })
    }
}

fn folding(options: &SearchOptions) -> Folding {
    Folding {
        case_sensitive: options.is_case_sensitive,
        strip_diacritics: options.ignore_diacritics,
    }
}

fn bitap_options(options: &SearchOptions) -> BitapOptions {
    BitapOptions {
        location: options.location,
        distance: options.distance,
        threshold: options.threshold,
        find_all_matches: options.find_all_matches,
        min_match_char_length: options.min_match_char_length,
        include_matches: options.include_matches,
        ignore_location: options.ignore_location,
    }
}
