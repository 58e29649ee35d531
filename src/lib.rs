// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search over a blog corpus.
//!
//! Folio loads every published post from a content store, builds an in-memory
//! index over the searchable fields, and answers typo-tolerant queries with a
//! ranked list of posts and (optionally) the character spans that matched.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  corpus/     │────▶│  index/      │────▶│  searcher.rs │
//! │ (load_corpus,│     │ (SearchIndex │     │ (Arc swap on │
//! │  ContentStore│     │  build,      │     │  rebuild)    │
//! │  facets)     │     │  search)     │     │              │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             │
//!               ┌─────────────┼─────────────┐
//!               ▼             ▼             ▼
//!        ┌────────────┐ ┌───────────┐ ┌────────────┐
//!        │  fuzzy/    │ │ scoring/  │ │ options.rs │
//!        │ (bitap,    │ │ (weights, │ │ (keys,     │
//!        │  chunking) │ │  ranking) │ │  threshold)│
//!        └────────────┘ └───────────┘ └────────────┘
//! ```
//!
//! # Scoring
//!
//! Every field value gets a bitap score in `[0, 1]` (0 = exact). A document's
//! score is the product of `score ^ (weight × norm)` over the fields that
//! matched, so a strong title hit counts for more than the same hit in the body,
//! and a hit in a short field counts for more than one in a long field. Results
//! sort ascending: lower is better.
//!
//! # Usage
//!
//! ```
//! use folio::{Corpus, Document, SearchIndex, SearchOptions};
//!
//! let corpus = Corpus::new(vec![
//!     Document::new("a", "Intro to Rust"),
//!     Document::new("b", "Intro to Go"),
//! ]).unwrap();
//!
//! let index = SearchIndex::build(corpus, SearchOptions::default()).unwrap();
//! let results = index.search("Rust", 10);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].id(), "a");
//! ```

pub mod corpus;
pub mod error;
pub mod fuzzy;
mod index;
pub mod options;
pub mod scoring;
mod searcher;
mod types;
mod utils;

pub mod testing;

#[cfg(feature = "wasm")]
mod wasm;

pub use corpus::{
    generate_excerpt, load_corpus, reading_time, ContentStore, Corpus, JsonCorpus, Page,
    Pagination, PostsDirectory,
};
pub use error::{ConfigError, LoadError};
pub use index::SearchIndex;
pub use options::{SearchKey, SearchOptions, DEFAULT_KEYS, DEFAULT_LIMIT, SUGGESTION_LIMIT};
pub use searcher::Searcher;
pub use types::{Document, Field, FieldMatch, FieldValue, MatchSpan, ReadingTime, SearchResult};
pub use utils::{fold_chars, Folding};

#[cfg(feature = "wasm")]
pub use wasm::FolioSearch;
