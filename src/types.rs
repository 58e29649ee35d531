// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search: documents, fields, and results.
//!
//! A `Document` is one blog post as the content store hands it over. Its wire
//! shape is the flat camelCase record the corpus endpoint serves, so the same
//! struct is used on both sides of the transport boundary.
//!
//! # Invariants
//!
//! - **Document**: `id` is unique within a corpus and never changes once loaded.
//!   Documents are immutable after load; any edit means a new corpus and a new index.
//!
//! - **MatchSpan**: `start <= end < value.chars().count()`. Both ends are inclusive
//!   char indices (not bytes) into the matched field value.
//!
//! - **SearchResult**: `score` is in `[0, 1]`, lower is better, `0` is exact.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::sync::Arc;

/// One searchable blog post.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Stable identity key (the post slug).
    #[serde(rename = "slug")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Post body. Serialized as `content` to match the corpus endpoint.
    #[serde(rename = "content", default, deserialize_with = "null_as_default")]
    pub body: String,
    /// Publication date as authored (ISO-8601 strings sort correctly).
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    /// Drafts never leave the loader, so this is read but not written.
    #[serde(default, skip_serializing)]
    pub draft: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<ReadingTime>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Document {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Document {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn draft(mut self) -> Self {
        self.draft = true;
        self
    }
}

/// Reading-time estimate, shaped like the `readingTime` record on the wire.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct ReadingTime {
    /// Human label, e.g. `"3 min read"`.
    pub text: String,
    pub minutes: f64,
    /// Milliseconds.
    pub time: u64,
    pub words: usize,
}

/// A searchable field of a [`Document`].
///
/// Scalar fields hold one value; `Tags` and `Categories` hold a list and every
/// element is matched on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Description,
    Tags,
    Categories,
    #[serde(alias = "content")]
    Body,
    Author,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Title,
        Field::Description,
        Field::Tags,
        Field::Categories,
        Field::Body,
        Field::Author,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Tags => "tags",
            Field::Categories => "categories",
            Field::Body => "body",
            Field::Author => "author",
        }
    }

    /// The values this field holds in `doc`. Empty strings count as absent.
    pub fn values(self, doc: &Document) -> FieldValue<'_> {
        fn scalar(s: &str) -> FieldValue<'_> {
            if s.is_empty() {
                FieldValue::Missing
            } else {
                FieldValue::Scalar(s)
            }
        }

        match self {
            Field::Title => scalar(&doc.title),
            Field::Description => scalar(&doc.description),
            Field::Body => scalar(&doc.body),
            Field::Author => doc.author.as_deref().map_or(FieldValue::Missing, scalar),
            Field::Tags => FieldValue::List(&doc.tags),
            Field::Categories => FieldValue::List(&doc.categories),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed view of one field's content.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Missing,
    Scalar(&'a str),
    List(&'a [String]),
}

/// Inclusive char range inside a matched value, for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

#[allow(clippy::len_without_is_empty)]
impl MatchSpan {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        MatchSpan { start, end }
    }

    /// Number of chars covered. Never zero.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }
}

/// One field (or one list element) that matched the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMatch {
    pub field: Field,
    /// Position in the list for `Tags`/`Categories`, `None` for scalar fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<usize>,
    /// The original (un-normalized) field text the spans point into.
    pub value: String,
    /// Per-field bitap score, before weighting.
    pub score: f64,
    pub norm: f64,
    /// Empty when span tracking is disabled. Empty does not mean "no match".
    pub spans: Vec<MatchSpan>,
}

/// A ranked hit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub document: Arc<Document>,
    /// Position of the document in the corpus the index was built from.
    pub ref_index: usize,
    /// Combined weighted score. Lower is better.
    pub score: f64,
    /// `None` when the index was built with `include_matches = false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<FieldMatch>>,
}

impl SearchResult {
    pub fn id(&self) -> &str {
        &self.document.id
    }
}
