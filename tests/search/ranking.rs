//! Field weights, field norms, and tie-breaking.

use super::common::{assert_ranked, make_doc, make_index, result_ids, sample_blog, titled};
use folio::Document;

#[test]
fn test_field_priority_order() {
    // Same exact value in a different field of each post, listed weakest first.
    let docs = vec![
        Document::new("author", "").with_author("Kubernetes"),
        Document::new("body", "").with_body("Kubernetes"),
        Document::new("tags", "").with_tags(["Kubernetes"]),
        Document::new("description", "").with_description("Kubernetes"),
        Document::new("title", "Kubernetes"),
    ];
    let index = make_index(docs);
    assert_eq!(
        result_ids(&index.search("kubernetes", 10)),
        vec!["title", "description", "tags", "body", "author"]
    );
}

#[test]
fn test_title_match_outranks_body_match() {
    let index = make_index(vec![
        make_doc("mountains", "About Mountains").with_body("Photography in the mountains is great"),
        make_doc("photography", "About Photography").with_body("Cameras and lenses"),
    ]);
    assert_eq!(
        result_ids(&index.search("photography", 10)),
        vec!["photography", "mountains"]
    );
}

#[test]
fn test_exact_outranks_typo() {
    let index = make_index(titled(&["Rusk ownership", "Rust ownership"]));
    assert_eq!(result_ids(&index.search("rust", 10)), vec!["d1", "d0"]);
}

#[test]
fn test_short_field_outranks_long_field() {
    let index = make_index(titled(&["Rust notes for busy people", "Rust notes"]));
    assert_eq!(result_ids(&index.search("rust", 10)), vec!["d1", "d0"]);
}

#[test]
fn test_more_matched_fields_rank_higher() {
    let index = make_index(vec![
        make_doc("title-only", "Rust notes"),
        make_doc("title-and-tag", "Rust notes").with_tags(["rust"]),
    ]);
    assert_eq!(
        result_ids(&index.search("rust", 10)),
        vec!["title-and-tag", "title-only"]
    );
}

#[test]
fn test_ties_keep_corpus_order() {
    let index = make_index(titled(&["Rust", "Rust", "Rust"]));
    let results = index.search("rust", 10);
    assert_eq!(result_ids(&results), vec!["d0", "d1", "d2"]);
    assert!(results.windows(2).all(|w| w[0].score == w[1].score));
}

#[test]
fn test_results_ascend_by_score() {
    let index = make_index(sample_blog());
    for query in ["rust", "search", "intro", "go", "photography", "wasm"] {
        let results = index.search(query, 10);
        assert_ranked(&results);
        for r in &results {
            assert!((0.0..=1.0).contains(&r.score), "{} scored {}", r.id(), r.score);
        }
    }
}

#[test]
fn test_repeated_queries_agree() {
    let index = make_index(sample_blog());
    let first = index.search("intro", 10);
    let second = index.search("intro", 10);
    assert_eq!(result_ids(&first), result_ids(&second));
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.score, b.score);
    }
}
