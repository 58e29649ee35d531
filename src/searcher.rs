// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared, swappable search handle.
//!
//! A [`SearchIndex`] is immutable once built. `Searcher` holds the current one
//! behind an `Arc` and replaces it whole when the corpus changes:
//!
//! ```text
//!   rebuild(corpus)
//!        │  build new index (no lock held)
//!        ▼
//!   write lock ── swap Arc ── unlock        search() clones the Arc under a
//!                                           read lock and queries outside it
//! ```
//!
//! A query that started before a swap finishes against the old index. Nobody
//! ever sees a half-built one.

use crate::corpus::{load_corpus, ContentStore, Corpus};
use crate::error::{ConfigError, LoadError};
use crate::index::SearchIndex;
use crate::options::SearchOptions;
use crate::types::SearchResult;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, warn};

struct Current {
    index: Arc<SearchIndex>,
    /// `None` until the first build and after a reset.
    fingerprint: Option<u32>,
}

pub struct Searcher {
    options: SearchOptions,
    current: RwLock<Current>,
}

impl Searcher {
    /// A searcher with nothing indexed yet. Queries return nothing until the
    /// first [`rebuild`](Self::rebuild).
    pub fn new(options: SearchOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Searcher {
            current: RwLock::new(Current {
                index: Arc::new(SearchIndex::empty(options.clone())),
                fingerprint: None,
            }),
            options,
        })
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// The index queries currently run against.
    pub fn snapshot(&self) -> Arc<SearchIndex> {
        Arc::clone(&self.current.read().index)
    }

    pub fn is_ready(&self) -> bool {
        self.current.read().index.is_built()
    }

    /// Build an index over `corpus` and make it current.
    pub fn rebuild(&self, corpus: impl Into<Arc<Corpus>>) {
        let corpus = corpus.into();
        let fingerprint = corpus.fingerprint();
        let index = Arc::new(SearchIndex::build_validated(corpus, self.options.clone()));
        self.swap(index, fingerprint);
    }

    /// Rebuild only if `corpus` differs from what is indexed now.
    ///
    /// Returns whether a rebuild happened.
    pub fn rebuild_if_changed(&self, corpus: impl Into<Arc<Corpus>>) -> bool {
        let corpus = corpus.into();
        let fingerprint = corpus.fingerprint();
        if self.current.read().fingerprint == Some(fingerprint) {
            debug!(fingerprint = %format!("{:08x}", fingerprint), "corpus unchanged");
            return false;
        }
        let index = Arc::new(SearchIndex::build_validated(corpus, self.options.clone()));
        self.swap(index, fingerprint);
        true
    }

    /// Load the corpus from `store` and rebuild if it changed.
    ///
    /// On a load failure the current index stays in place.
    pub fn reload<S: ContentStore + ?Sized>(&self, store: &S) -> Result<bool, LoadError> {
        match load_corpus(store) {
            Ok(corpus) => Ok(self.rebuild_if_changed(corpus)),
            Err(e) => {
                warn!(error = %e, ready = self.is_ready(), "corpus load failed; keeping current index");
                Err(e)
            }
        }
    }

    /// Drop the current index. Queries return nothing until the next rebuild.
    pub fn reset(&self) {
        let mut current = self.current.write();
        current.index = Arc::new(SearchIndex::empty(self.options.clone()));
        current.fingerprint = None;
        info!("search index reset");
    }

    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        self.snapshot().search(query, limit)
    }

    pub fn suggestions(&self, query: &str) -> Vec<SearchResult> {
        self.snapshot().suggestions(query)
    }

    /// Tags across the indexed corpus, for filter UIs.
    pub fn searchable_tags(&self) -> Vec<String> {
        self.snapshot().corpus().tags()
    }

    pub fn searchable_categories(&self) -> Vec<String> {
        self.snapshot().corpus().categories()
    }

    fn swap(&self, index: Arc<SearchIndex>, fingerprint: u32) {
        let documents = index.len();
        {
            let mut current = self.current.write();
            current.index = index;
            current.fingerprint = Some(fingerprint);
        }
        info!(
            documents,
            fingerprint = %format!("{:08x}", fingerprint),
            "search index swapped"
        );
    }
}
