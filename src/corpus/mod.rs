// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus loading: getting the full set of published posts into memory.
//!
//! The content store is whatever holds the posts (a directory of markdown files,
//! a JSON export served by another process, or a `Vec` in a test). The loader
//! never filters by relevance and never paginates: it returns every non-draft
//! document, newest first, or an error.
//!
//! ```text
//! ContentStore ──list_documents()──▶ drop drafts ──▶ sort by date ──▶ Corpus
//!   (posts dir,                                                  (unique ids,
//!    JSON export)                                                 immutable)
//! ```

pub mod excerpt;
pub mod facets;
pub mod posts;
pub mod store;

use crate::error::LoadError;
use crate::types::Document;
use serde::Serialize;
use std::collections::HashSet;
use std::io;
use std::sync::Arc;
use tracing::{debug, warn};

pub use excerpt::{generate_excerpt, reading_time};
pub use facets::{Page, Pagination};
pub use posts::{parse_post, PostsDirectory};
pub use store::JsonCorpus;

/// Anything that can list every document it holds.
///
/// Implementations return drafts too; [`load_corpus`] is what filters them.
pub trait ContentStore {
    fn list_documents(&self) -> Result<Vec<Document>, LoadError>;
}

impl ContentStore for [Document] {
    fn list_documents(&self) -> Result<Vec<Document>, LoadError> {
        Ok(self.to_vec())
    }
}

impl ContentStore for Vec<Document> {
    fn list_documents(&self) -> Result<Vec<Document>, LoadError> {
        Ok(self.clone())
    }
}

impl<T: ContentStore + ?Sized> ContentStore for &T {
    fn list_documents(&self) -> Result<Vec<Document>, LoadError> {
        (**self).list_documents()
    }
}

impl<T: ContentStore + ?Sized> ContentStore for Box<T> {
    fn list_documents(&self) -> Result<Vec<Document>, LoadError> {
        (**self).list_documents()
    }
}

/// An immutable, ordered snapshot of published documents.
///
/// Serializes as a flat JSON array of document records, which is exactly the
/// transport format [`JsonCorpus`] reads back.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Corpus {
    documents: Vec<Arc<Document>>,
}

impl Corpus {
    /// Wrap documents as-is, keeping their order. Fails on duplicate ids.
    pub fn new(documents: Vec<Document>) -> Result<Self, LoadError> {
        let mut seen = HashSet::with_capacity(documents.len());
        for doc in &documents {
            if !seen.insert(doc.id.as_str()) {
                return Err(LoadError::DuplicateId(doc.id.clone()));
            }
        }
        Ok(Corpus {
            documents: documents.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Document>> {
        self.documents.get(index)
    }

    pub fn documents(&self) -> &[Arc<Document>] {
        &self.documents
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter().map(|doc| doc.as_ref())
    }

    pub fn find(&self, id: &str) -> Option<&Arc<Document>> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// CRC32 over the serialized corpus (every record field, in order) plus
    /// each document's draft flag, which the transport format leaves out.
    ///
    /// Equal fingerprints mean the same documents in the same order, so a
    /// rebuild would change neither results nor the documents they carry.
    pub fn fingerprint(&self) -> u32 {
        let mut writer = CrcWriter(crc32fast::Hasher::new());
        if let Err(e) = serde_json::to_writer(&mut writer, self) {
            warn!(error = %e, "corpus fingerprint over partial serialization");
        }
        let mut hasher = writer.0;
        for doc in self.iter() {
            hasher.update(&[u8::from(doc.draft)]);
        }
        hasher.finalize()
    }
}

/// Feeds serialized bytes straight into a CRC32 hasher.
struct CrcWriter(crc32fast::Hasher);

impl io::Write for CrcWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Load the full, current set of published documents from `store`.
///
/// Drafts are dropped and the rest sorted newest first (ties by id so the order
/// never depends on how the store enumerated its files).
pub fn load_corpus<S: ContentStore + ?Sized>(store: &S) -> Result<Corpus, LoadError> {
    let listed = store.list_documents()?;
    let total = listed.len();

    let mut documents: Vec<Document> = listed.into_iter().filter(|doc| !doc.draft).collect();
    documents.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));

    debug!(
        total,
        published = documents.len(),
        drafts = total - documents.len(),
        "loaded corpus"
    );

    Corpus::new(documents)
}
