// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::corpus::Corpus;
use crate::index::SearchIndex;
use crate::options::SearchOptions;
use crate::types::{Document, SearchResult};

/// A document with only an id and a title.
pub fn make_doc(id: &str, title: &str) -> Document {
    Document::new(id, title)
}

/// A fully populated blog post.
pub fn make_post(id: &str, title: &str, description: &str, tags: &[&str], body: &str) -> Document {
    Document::new(id, title)
        .with_description(description)
        .with_tags(tags.iter().copied())
        .with_body(body)
}

/// Wrap documents in a corpus, keeping their order.
///
/// # Panics
///
/// On duplicate ids.
pub fn make_corpus(docs: Vec<Document>) -> Corpus {
    Corpus::new(docs).expect("test corpus has unique ids")
}

/// Build an index over `docs` with default options.
pub fn make_index(docs: Vec<Document>) -> SearchIndex {
    SearchIndex::build(make_corpus(docs), SearchOptions::default())
        .expect("default options are valid")
}

/// Result ids in rank order.
pub fn result_ids(results: &[SearchResult]) -> Vec<String> {
    results.iter().map(|r| r.id().to_string()).collect()
}

/// A small blog covering every searchable field.
pub fn sample_blog() -> Vec<Document> {
    vec![
        make_post(
            "intro-to-rust",
            "Intro to Rust",
            "Ownership, borrowing, and lifetimes for beginners",
            &["rust", "beginners"],
            "Rust is a systems programming language focused on safety.",
        )
        .with_author("Ferris")
        .with_date("2024-05-01"),
        make_post(
            "intro-to-go",
            "Intro to Go",
            "Goroutines and channels",
            &["go", "concurrency"],
            "Go makes concurrent programming approachable.",
        )
        .with_date("2024-04-01"),
        make_post(
            "wasm-search",
            "Client-side search with WebAssembly",
            "Shipping a search index to the browser",
            &["wasm", "search"],
            "We compile the matcher to WebAssembly and query it from JavaScript.",
        )
        .with_author("Ada")
        .with_date("2024-03-01"),
        make_post(
            "photography",
            "Mountain photography",
            "Light, weather, and patience",
            &["photography", "travel"],
            "Notes from a week in the Alps.",
        )
        .with_date("2024-02-01"),
    ]
}
