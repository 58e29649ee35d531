//! Result limits.

use super::common::{index_with, make_index, result_ids, titled};
use folio::{SearchOptions, DEFAULT_LIMIT};

fn many_rust_posts(n: usize) -> Vec<folio::Document> {
    let titles: Vec<String> = (0..n).map(|i| format!("Rust {}", i)).collect();
    let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
    titled(&refs)
}

#[test]
fn test_zero_limit_uses_default() {
    let index = make_index(many_rust_posts(25));
    assert_eq!(index.search("rust", 0).len(), DEFAULT_LIMIT);
}

#[test]
fn test_limit_truncates() {
    let index = make_index(many_rust_posts(25));
    assert_eq!(index.search("rust", 3).len(), 3);
    assert_eq!(index.search("rust", 25).len(), 25);
}

#[test]
fn test_limit_above_match_count_returns_all_matches() {
    let index = make_index(many_rust_posts(4));
    assert_eq!(index.search("rust", 100).len(), 4);
}

#[test]
fn test_smaller_limit_is_prefix_of_larger() {
    let index = make_index(many_rust_posts(25));
    let wide = result_ids(&index.search("rust", 20));
    for k in [1, 5, 10, 19] {
        assert_eq!(result_ids(&index.search("rust", k)), wide[..k].to_vec());
    }
}

#[test]
fn test_configured_default_limit() {
    let options = SearchOptions {
        default_limit: 4,
        ..SearchOptions::default()
    };
    let index = index_with(many_rust_posts(25), options);
    assert_eq!(index.search("rust", 0).len(), 4);
    assert_eq!(index.search("rust", 7).len(), 7);
}
