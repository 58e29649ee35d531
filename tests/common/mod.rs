//! Shared test utilities and fixtures.

#![allow(dead_code)]

use folio::{Corpus, Document, SearchIndex, SearchOptions, SearchResult};
use std::fs;
use std::path::Path;

// Re-export canonical test utilities from folio::testing
pub use folio::testing::{make_corpus, make_doc, make_index, make_post, result_ids, sample_blog};

// ============================================================================
// INDEX HELPERS
// ============================================================================

/// Build an index with custom options.
pub fn index_with(docs: Vec<Document>, options: SearchOptions) -> SearchIndex {
    SearchIndex::build(make_corpus(docs), options).expect("valid options")
}

/// Title-only documents, ids `d0`, `d1`, …
pub fn titled(titles: &[&str]) -> Vec<Document> {
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| make_doc(&format!("d{}", i), title))
        .collect()
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Results ascend by score, with ties in corpus order.
pub fn assert_ranked(results: &[SearchResult]) {
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score < b.score || (a.score == b.score && a.ref_index < b.ref_index),
            "out of order: {} ({}, #{}) before {} ({}, #{})",
            a.id(),
            a.score,
            a.ref_index,
            b.id(),
            b.score,
            b.ref_index
        );
    }
}

/// Every span lies inside its value and is at least `min_len` chars long.
pub fn assert_spans_valid(results: &[SearchResult], min_len: usize) {
    for result in results {
        for m in result.matches.iter().flatten() {
            let len = m.value.chars().count();
            for span in &m.spans {
                assert!(span.start <= span.end, "inverted span {:?}", span);
                assert!(span.end < len, "span {:?} outside {:?}", span, m.value);
                assert!(span.len() >= min_len, "span {:?} shorter than {}", span, min_len);
            }
        }
    }
}

// ============================================================================
// POST FIXTURES
// ============================================================================

/// Write a markdown post with the given front matter lines.
pub fn write_post(dir: &Path, slug: &str, front_matter: &[&str], body: &str) {
    let content = format!("---\n{}\n---\n{}\n", front_matter.join("\n"), body);
    fs::write(dir.join(format!("{}.md", slug)), content).expect("write post");
}

/// Corpus ids in order.
pub fn corpus_ids(corpus: &Corpus) -> Vec<String> {
    corpus.iter().map(|d| d.id.clone()).collect()
}
