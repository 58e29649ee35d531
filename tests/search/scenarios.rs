//! End-to-end query scenarios over small corpora.

use super::common::{make_corpus, make_doc, make_index, result_ids, sample_blog, titled};
use folio::{SearchIndex, SearchOptions};

#[test]
fn test_rust_query_skips_go_post() {
    let index = make_index(vec![
        make_doc("a", "Intro to Rust"),
        make_doc("b", "Intro to Go"),
    ]);
    assert_eq!(result_ids(&index.search("Rust", 10)), vec!["a"]);
}

#[test]
fn test_empty_corpus_returns_nothing() {
    let index = make_index(vec![]);
    assert!(index.search("anything", 10).is_empty());
}

#[test]
fn test_empty_query_returns_nothing() {
    let index = make_index(sample_blog());
    assert!(index.search("", 5).is_empty());
}

#[test]
fn test_whitespace_and_single_char_queries_return_nothing() {
    let index = make_index(sample_blog());
    assert!(index.search("    ", 5).is_empty());
    assert!(index.search("r", 5).is_empty());
    assert!(index.search("  r  ", 5).is_empty());
}

#[test]
fn test_unbuilt_index_returns_nothing() {
    let index = SearchIndex::empty(SearchOptions::default());
    assert!(index.search("rust", 10).is_empty());
    assert!(index.suggestions("rust").is_empty());
}

#[test]
fn test_query_is_case_insensitive_by_default() {
    let index = make_index(sample_blog());
    assert_eq!(
        result_ids(&index.search("RUST", 10)),
        result_ids(&index.search("rust", 10))
    );
}

#[test]
fn test_surrounding_whitespace_ignored() {
    let index = make_index(sample_blog());
    assert_eq!(
        result_ids(&index.search("  wasm  ", 10)),
        result_ids(&index.search("wasm", 10))
    );
}

#[test]
fn test_single_typo_still_matches() {
    let index = make_index(titled(&["Rust ownership", "Intro to Go"]));
    assert_eq!(result_ids(&index.search("rusk", 10)), vec!["d0"]);
}

#[test]
fn test_unrelated_query_matches_nothing() {
    let index = make_index(sample_blog());
    assert!(index.search("xylophone", 10).is_empty());
}

#[test]
fn test_matches_on_tags_and_author() {
    let index = make_index(sample_blog());

    let by_tag = result_ids(&index.search("concurrency", 10));
    assert_eq!(by_tag.first().map(String::as_str), Some("intro-to-go"));

    let by_author = result_ids(&index.search("Ferris", 10));
    assert_eq!(by_author, vec!["intro-to-rust"]);
}

#[test]
fn test_missing_fields_are_not_errors() {
    let index = make_index(vec![
        make_doc("bare", ""),
        make_doc("titled", "Photography"),
    ]);
    assert_eq!(result_ids(&index.search("photography", 10)), vec!["titled"]);
}

#[test]
fn test_results_share_corpus_documents() {
    let corpus = make_corpus(sample_blog());
    let index = SearchIndex::build(corpus, SearchOptions::default()).unwrap();
    let results = index.search("rust", 1);
    let stored = index.corpus().find("intro-to-rust").unwrap();
    assert!(std::sync::Arc::ptr_eq(&results[0].document, stored));
}

#[test]
fn test_suggestions_cap_at_five() {
    let titles: Vec<String> = (0..8).map(|i| format!("Rust tip {}", i)).collect();
    let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
    let index = make_index(titled(&refs));
    assert_eq!(index.suggestions("rust").len(), 5);
}
