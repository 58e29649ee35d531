// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Only two things can go wrong: the content store can't produce a corpus
//! (`LoadError`), or the search options are nonsense (`ConfigError`). Querying
//! never fails; an index that isn't built yet answers with no results.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The content store was unreachable or handed back something malformed.
///
/// Callers treat this as "search unavailable" and may retry the load later.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid corpus JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid front matter in {path}: {message}")]
    FrontMatter { path: PathBuf, message: String },

    #[error("missing required field `{field}` in {path}")]
    MissingField { path: PathBuf, field: &'static str },

    #[error("duplicate document id `{0}`")]
    DuplicateId(String),
}

/// Search options that can't produce a meaningful index.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("weight for `{field}` must be a positive finite number, got {weight}")]
    InvalidWeight { field: String, weight: f64 },

    #[error("field `{0}` is listed more than once")]
    DuplicateKey(String),

    #[error("at least one search key is required")]
    NoKeys,

    #[error("minMatchCharLength must be at least 1")]
    InvalidMinMatch,

    #[error("failed to read options file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),
}
