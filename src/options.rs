// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration, fixed when an index is built.
//!
//! Every option has a default, so a JSON options file only needs the keys it
//! wants to change:
//!
//! ```json
//! { "threshold": 0.2, "keys": [{ "field": "title", "weight": 1.0 }] }
//! ```

use crate::error::ConfigError;
use crate::types::Field;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Default number of results when the caller doesn't say.
pub const DEFAULT_LIMIT: usize = 10;

/// Number of results for type-ahead suggestions.
pub const SUGGESTION_LIMIT: usize = 5;

/// A field to search and how much a match in it counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchKey {
    pub field: Field,
    pub weight: f64,
}

impl SearchKey {
    pub const fn new(field: Field, weight: f64) -> Self {
        SearchKey { field, weight }
    }
}

/// Default field weights: title > description > tags > body > author.
///
/// Categories are left out; add a key for them to make them searchable.
pub const DEFAULT_KEYS: [SearchKey; 5] = [
    SearchKey::new(Field::Title, 0.7),
    SearchKey::new(Field::Description, 0.3),
    SearchKey::new(Field::Tags, 0.2),
    SearchKey::new(Field::Body, 0.1),
    SearchKey::new(Field::Author, 0.05),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    pub keys: Vec<SearchKey>,
    /// 0.0 matches only exact text, 1.0 matches anything.
    pub threshold: f64,
    /// Match runs shorter than this are dropped, and shorter queries return nothing.
    pub min_match_char_length: usize,
    /// Scan each field to the end instead of stopping near the best hit.
    pub find_all_matches: bool,
    /// Record match spans for highlighting.
    pub include_matches: bool,
    /// Where in a field a match is expected to start.
    pub location: usize,
    /// How far from `location` a match can drift before it scores 1.0 on
    /// proximity alone. `0` means only matches exactly at `location` count.
    pub distance: usize,
    pub ignore_location: bool,
    pub ignore_field_norm: bool,
    pub is_case_sensitive: bool,
    /// Fold accented characters onto their base letter (`é` matches `e`).
    pub ignore_diacritics: bool,
    pub default_limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            keys: DEFAULT_KEYS.to_vec(),
            threshold: 0.3,
            min_match_char_length: 2,
            find_all_matches: true,
            include_matches: true,
            location: 0,
            distance: 100,
            ignore_location: false,
            ignore_field_norm: false,
            is_case_sensitive: false,
            ignore_diacritics: false,
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchOptions {
    /// Read options from a JSON file. Missing keys take their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let options: SearchOptions = serde_json::from_str(raw)?;
        options.validate()?;
        Ok(options)
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_keys(mut self, keys: Vec<SearchKey>) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_min_match_char_length(mut self, len: usize) -> Self {
        self.min_match_char_length = len;
        self
    }

    pub fn with_include_matches(mut self, include: bool) -> Self {
        self.include_matches = include;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        if self.min_match_char_length == 0 {
            return Err(ConfigError::InvalidMinMatch);
        }
        if self.keys.is_empty() {
            return Err(ConfigError::NoKeys);
        }
        let mut seen = HashSet::new();
        for key in &self.keys {
            if !key.weight.is_finite() || key.weight <= 0.0 {
                return Err(ConfigError::InvalidWeight {
                    field: key.field.to_string(),
                    weight: key.weight,
                });
            }
            if !seen.insert(key.field) {
                return Err(ConfigError::DuplicateKey(key.field.to_string()));
            }
        }
        Ok(())
    }

    /// `limit` if it is positive, otherwise the configured default.
    pub fn effective_limit(&self, limit: usize) -> usize {
        if limit > 0 {
            limit
        } else {
            self.default_limit.max(1)
        }
    }
}
