// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-document precomputation: folded chars and field norms for every
//! configured key, done once at build time so queries only run bitap.
//!
//! Values are trimmed like queries are. Spans still index the untrimmed text.

use crate::options::SearchKey;
use crate::scoring::field_norm;
use crate::types::{Document, Field, FieldValue};
use crate::utils::{fold_chars, Folding};

/// One searchable string: a scalar field, or one element of a list field.
#[derive(Debug, Clone)]
pub(crate) struct IndexedValue {
    pub chars: Vec<char>,
    pub norm: f64,
    /// List position for `Tags`/`Categories`.
    pub element: Option<usize>,
    /// Leading whitespace chars trimmed off the original text. Spans found in
    /// `chars` shift right by this much to index the original.
    pub offset: usize,
}

/// Everything searchable in one document, grouped by key (same order as the
/// options' key list). Absent fields are simply empty groups.
#[derive(Debug, Clone)]
pub(crate) struct IndexedRecord {
    pub fields: Vec<Vec<IndexedValue>>,
}

impl IndexedRecord {
    pub fn build(doc: &Document, keys: &[SearchKey], folding: Folding) -> Self {
        let index_value = |text: &str, element: Option<usize>| {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            let leading = text.len() - text.trim_start().len();
            Some(IndexedValue {
                chars: fold_chars(trimmed, folding),
                norm: field_norm(trimmed),
                element,
                offset: text[..leading].chars().count(),
            })
        };

        let fields = keys
            .iter()
            .map(|key| match key.field.values(doc) {
                FieldValue::Missing => Vec::new(),
                FieldValue::Scalar(text) => index_value(text, None).into_iter().collect(),
                FieldValue::List(items) => items
                    .iter()
                    .enumerate()
                    .filter_map(|(i, item)| index_value(item, Some(i)))
                    .collect(),
            })
            .collect();

        IndexedRecord { fields }
    }

    pub fn value_count(&self) -> usize {
        self.fields.iter().map(Vec::len).sum()
    }
}

/// The original text behind an indexed value, for reporting matches.
pub(crate) fn field_text(doc: &Document, field: Field, element: Option<usize>) -> &str {
    match (field.values(doc), element) {
        (FieldValue::Scalar(text), _) => text,
        (FieldValue::List(items), Some(i)) => items.get(i).map_or("", String::as_str),
        _ => "",
    }
}
