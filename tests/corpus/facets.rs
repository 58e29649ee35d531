//! Listing views: tags, categories, featured, recent, pages.

use super::common::make_corpus;
use folio::corpus::facets::{POSTS_PER_PAGE, RECENT_POSTS};
use folio::{load_corpus, Corpus, Document};
use std::collections::HashSet;

fn blog() -> Corpus {
    let docs: Vec<Document> = (0..20)
        .map(|i| {
            let doc = Document::new(format!("post-{:02}", i), format!("Post {}", i))
                .with_date(format!("2024-02-{:02}", i + 1))
                .with_tags(match i % 3 {
                    0 => vec!["rust"],
                    1 => vec!["go", "concurrency"],
                    _ => vec!["rust", "wasm"],
                })
                .with_categories([if i < 10 { "notes" } else { "tutorials" }]);
            if i % 7 == 0 {
                doc.featured()
            } else {
                doc
            }
        })
        .collect();
    load_corpus(&docs).unwrap()
}

#[test]
fn test_tags_and_categories_sorted_unique() {
    let blog = blog();
    assert_eq!(blog.tags(), vec!["concurrency", "go", "rust", "wasm"]);
    assert_eq!(blog.categories(), vec!["notes", "tutorials"]);
}

#[test]
fn test_filters_keep_newest_first() {
    let blog = blog();
    let go = blog.by_tag("go");
    assert_eq!(go.len(), 7);
    assert!(go.windows(2).all(|w| w[0].date > w[1].date));
    assert_eq!(blog.by_category("tutorials").len(), 10);
    assert!(blog.by_tag("Rust").is_empty());
}

#[test]
fn test_featured_and_recent() {
    let blog = blog();
    let featured: Vec<String> = blog.featured().iter().map(|d| d.id.clone()).collect();
    assert_eq!(featured, vec!["post-14", "post-07", "post-00"]);

    let recent = blog.recent(RECENT_POSTS);
    assert_eq!(recent.len(), RECENT_POSTS);
    assert_eq!(recent[0].id, "post-19");
}

#[test]
fn test_pages_partition_the_corpus() {
    let blog = blog();
    let first = blog.page(1, POSTS_PER_PAGE);
    assert_eq!(first.pagination.total_pages, 4);
    assert!(first.pagination.has_next_page);
    assert!(!first.pagination.has_previous_page);

    let mut seen = HashSet::new();
    for page in 1..=first.pagination.total_pages {
        for post in blog.page(page, POSTS_PER_PAGE).posts {
            assert!(seen.insert(post.id.clone()), "{} on two pages", post.id);
        }
    }
    assert_eq!(seen.len(), blog.len());

    let last = blog.page(4, POSTS_PER_PAGE);
    assert_eq!(last.posts.len(), 2);
    assert!(!last.pagination.has_next_page);
}

#[test]
fn test_empty_corpus_views() {
    let empty = make_corpus(vec![]);
    assert!(empty.tags().is_empty());
    let page = empty.page(1, POSTS_PER_PAGE);
    assert!(page.posts.is_empty());
    assert_eq!(page.pagination.total_pages, 0);
    assert!(!page.pagination.has_next_page);
}
