//! Index lifecycle: rebuilds, swaps, reloads.

use super::common::{make_corpus, make_doc, make_index, result_ids, sample_blog, write_post};
use folio::{PostsDirectory, SearchIndex, SearchOptions, Searcher};

#[test]
fn test_build_is_idempotent() {
    let a = make_index(sample_blog());
    let b = make_index(sample_blog());
    for query in ["rust", "intro", "search", "go"] {
        let (ra, rb) = (a.search(query, 10), b.search(query, 10));
        assert_eq!(result_ids(&ra), result_ids(&rb));
        for (x, y) in ra.iter().zip(&rb) {
            assert_eq!(x.score, y.score);
            assert_eq!(x.matches, y.matches);
        }
    }
}

#[test]
fn test_rebuild_drops_old_documents() {
    let mut index = make_index(vec![make_doc("old", "Rust ownership")]);
    index.rebuild(make_corpus(vec![make_doc("new", "Rust traits")]));
    assert_eq!(result_ids(&index.search("rust", 10)), vec!["new"]);
    assert!(index.corpus().find("old").is_none());
}

#[test]
fn test_rebuild_to_empty_corpus() {
    let mut index = make_index(sample_blog());
    index.rebuild(make_corpus(vec![]));
    assert!(index.is_built());
    assert!(index.search("rust", 10).is_empty());
}

#[test]
fn test_searcher_lifecycle() {
    let searcher = Searcher::new(SearchOptions::default()).unwrap();
    assert!(searcher.search("rust", 10).is_empty());

    searcher.rebuild(make_corpus(sample_blog()));
    assert_eq!(
        result_ids(&searcher.search("Rust", 1)),
        vec!["intro-to-rust"]
    );

    searcher.rebuild(make_corpus(vec![make_doc("only", "Rust again")]));
    assert_eq!(result_ids(&searcher.search("rust", 10)), vec!["only"]);

    searcher.reset();
    assert!(searcher.search("rust", 10).is_empty());
}

#[test]
fn test_searcher_matches_direct_index() {
    let searcher = Searcher::new(SearchOptions::default()).unwrap();
    searcher.rebuild(make_corpus(sample_blog()));
    let direct = SearchIndex::build(make_corpus(sample_blog()), SearchOptions::default()).unwrap();
    assert_eq!(
        result_ids(&searcher.search("intro", 10)),
        result_ids(&direct.search("intro", 10))
    );
}

#[test]
fn test_reload_from_posts_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_post(dir.path(), "ownership", &["title: Rust ownership", "date: 2024-01-01"], "");
    let store = PostsDirectory::new(dir.path());

    let searcher = Searcher::new(SearchOptions::default()).unwrap();
    assert!(searcher.reload(&store).unwrap());
    assert!(!searcher.reload(&store).unwrap());
    assert_eq!(result_ids(&searcher.search("rust", 10)), vec!["ownership"]);

    write_post(dir.path(), "traits", &["title: Rust traits", "date: 2024-02-01"], "");
    assert!(searcher.reload(&store).unwrap());
    assert_eq!(
        result_ids(&searcher.search("rust", 10)),
        vec!["traits", "ownership"]
    );
}

#[test]
fn test_failed_reload_keeps_serving() {
    let dir = tempfile::tempdir().unwrap();
    write_post(dir.path(), "ownership", &["title: Rust ownership"], "");
    let store = PostsDirectory::new(dir.path());

    let searcher = Searcher::new(SearchOptions::default()).unwrap();
    searcher.reload(&store).unwrap();

    std::fs::write(dir.path().join("broken.md"), "no front matter").unwrap();
    assert!(searcher.reload(&store).is_err());
    assert_eq!(result_ids(&searcher.search("rust", 10)), vec!["ownership"]);
}
