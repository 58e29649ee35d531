// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Listing views over a corpus: tags, categories, featured and recent posts,
//! and fixed-size pages.
//!
//! All of these preserve corpus order (newest first).

use super::Corpus;
use crate::types::Document;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Posts per page on listing pages.
pub const POSTS_PER_PAGE: usize = 6;

/// Posts shown in "recent posts" widgets.
pub const RECENT_POSTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_posts: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub posts: Vec<Arc<Document>>,
    pub pagination: Pagination,
}

impl Corpus {
    /// Every tag in use, sorted and deduplicated.
    pub fn tags(&self) -> Vec<String> {
        collect_labels(self.iter().flat_map(|doc| doc.tags.iter()))
    }

    /// Every category in use, sorted and deduplicated.
    pub fn categories(&self) -> Vec<String> {
        collect_labels(self.iter().flat_map(|doc| doc.categories.iter()))
    }

    pub fn by_tag(&self, tag: &str) -> Vec<Arc<Document>> {
        self.filter(|doc| doc.tags.iter().any(|t| t == tag))
    }

    pub fn by_category(&self, category: &str) -> Vec<Arc<Document>> {
        self.filter(|doc| doc.categories.iter().any(|c| c == category))
    }

    pub fn featured(&self) -> Vec<Arc<Document>> {
        self.filter(|doc| doc.featured)
    }

    pub fn recent(&self, limit: usize) -> Vec<Arc<Document>> {
        self.documents().iter().take(limit).cloned().collect()
    }

    /// One page of posts. Pages are 1-based; anything below 1 reads as page 1.
    /// `per_page` of 0 falls back to [`POSTS_PER_PAGE`].
    pub fn page(&self, page: usize, per_page: usize) -> Page {
        let page = page.max(1);
        let per_page = if per_page == 0 { POSTS_PER_PAGE } else { per_page };
        let total_posts = self.len();
        let start = (page - 1).saturating_mul(per_page);
        let end = start.saturating_add(per_page);

        let posts = self
            .documents()
            .iter()
            .skip(start)
            .take(per_page)
            .cloned()
            .collect();

        Page {
            posts,
            pagination: Pagination {
                current_page: page,
                total_pages: total_posts.div_ceil(per_page),
                total_posts,
                has_next_page: end < total_posts,
                has_previous_page: page > 1,
            },
        }
    }

    fn filter(&self, predicate: impl Fn(&Document) -> bool) -> Vec<Arc<Document>> {
        self.documents()
            .iter()
            .filter(|doc| predicate(doc))
            .cloned()
            .collect()
    }
}

fn collect_labels<'a>(labels: impl Iterator<Item = &'a String>) -> Vec<String> {
    labels
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
