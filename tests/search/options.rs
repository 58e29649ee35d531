//! Search options: threshold, location, case, diacritics, keys.

use super::common::{index_with, make_doc, result_ids, titled};
use folio::{ConfigError, Field, SearchIndex, SearchKey, SearchOptions, DEFAULT_KEYS};
use std::fs;

fn strict() -> SearchOptions {
    SearchOptions::default().with_threshold(0.0)
}

#[test]
fn test_zero_threshold_only_matches_exact_text() {
    let index = index_with(titled(&["Rust ownership", "Rusk ownership"]), strict());
    assert_eq!(result_ids(&index.search("rust", 10)), vec!["d0"]);
}

#[test]
fn test_location_penalty_and_ignore_location() {
    let docs = titled(&["Intro to Rust"]);

    // 9 chars from the start costs 0.09, which a zero threshold rejects.
    let index = index_with(docs.clone(), strict());
    assert!(index.search("rust", 10).is_empty());

    let options = SearchOptions {
        ignore_location: true,
        ..strict()
    };
    let index = index_with(docs, options);
    assert_eq!(result_ids(&index.search("rust", 10)), vec!["d0"]);
}

#[test]
fn test_far_matches_fall_outside_distance() {
    let body = format!("{}kubernetes", "lorem ipsum ".repeat(10));
    let docs = vec![make_doc("far", "Notes").with_body(body.clone())];

    let index = index_with(docs.clone(), SearchOptions::default());
    assert!(index.search("kubernetes", 10).is_empty());

    let options = SearchOptions {
        ignore_location: true,
        ..SearchOptions::default()
    };
    assert_eq!(result_ids(&index_with(docs, options).search("kubernetes", 10)), vec!["far"]);
}

#[test]
fn test_case_sensitive_matching() {
    let options = SearchOptions {
        is_case_sensitive: true,
        ..strict()
    };
    let index = index_with(titled(&["Rust ownership"]), options);
    assert!(index.search("rust", 10).is_empty());
    assert_eq!(result_ids(&index.search("Rust", 10)), vec!["d0"]);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_ignore_diacritics() {
    let docs = titled(&["Café culture"]);
    assert!(index_with(docs.clone(), strict()).search("cafe", 10).is_empty());

    let options = SearchOptions {
        ignore_diacritics: true,
        ..strict()
    };
    let results = index_with(docs, options).search("cafe", 10);
    assert_eq!(result_ids(&results), vec!["d0"]);
    // Matches still report the original text.
    assert_eq!(results[0].matches.as_ref().unwrap()[0].value, "Café culture");
}

#[test]
fn test_categories_need_a_key() {
    let docs = vec![make_doc("a", "Notes").with_categories(["Tutorials"])];

    let index = index_with(docs.clone(), SearchOptions::default());
    assert!(index.search("tutorials", 10).is_empty());

    let mut keys = DEFAULT_KEYS.to_vec();
    keys.push(SearchKey::new(Field::Categories, 0.15));
    let index = index_with(docs, SearchOptions::default().with_keys(keys));
    let results = index.search("tutorials", 10);
    assert_eq!(result_ids(&results), vec!["a"]);
    assert_eq!(results[0].matches.as_ref().unwrap()[0].field, Field::Categories);
}

#[test]
fn test_only_configured_keys_are_searched() {
    let docs = vec![make_doc("a", "Notes").with_body("kubernetes")];
    let options = SearchOptions::default().with_keys(vec![SearchKey::new(Field::Title, 1.0)]);
    assert!(index_with(docs, options).search("kubernetes", 10).is_empty());
}

#[test]
fn test_matches_omitted_when_disabled() {
    let options = SearchOptions::default().with_include_matches(false);
    let results = index_with(titled(&["Intro to Rust"]), options).search("rust", 10);
    assert_eq!(results.len(), 1);
    assert!(results[0].matches.is_none());
}

#[test]
fn test_longer_minimum_query_length() {
    let options = SearchOptions::default().with_min_match_char_length(3);
    let index = index_with(titled(&["Go concurrency", "Intro to Go"]), options);
    assert!(index.search("go", 10).is_empty());
    assert!(!index.search("concurrency", 10).is_empty());
}

#[test]
fn test_invalid_options_rejected_at_build() {
    let err = SearchIndex::build(
        folio::Corpus::empty(),
        SearchOptions::default().with_threshold(1.5),
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidThreshold(_)));
}

#[test]
fn test_options_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("search.json");
    fs::write(
        &path,
        r#"{"threshold": 0.0, "keys": [{"field": "title", "weight": 1}]}"#,
    )
    .unwrap();

    let options = SearchOptions::from_path(&path).unwrap();
    assert_eq!(options.threshold, 0.0);
    assert_eq!(options.keys.len(), 1);
    assert_eq!(options.distance, 100);

    fs::write(&path, r#"{"threshold": 3}"#).unwrap();
    assert!(matches!(
        SearchOptions::from_path(&path),
        Err(ConfigError::InvalidThreshold(_))
    ));

    assert!(matches!(
        SearchOptions::from_path(dir.path().join("missing.json")),
        Err(ConfigError::Io { .. })
    ));
}
