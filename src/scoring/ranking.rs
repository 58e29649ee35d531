// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: ascending score, corpus order on ties.
//!
//! Ties fall back to the document's position in the corpus rather than its id
//! or title, so the loader's ordering (newest first) decides between equally
//! good hits and repeated queries always agree.

use crate::types::SearchResult;
use std::cmp::Ordering;

/// Compare two results for ranking.
///
/// 1. **Score** - ascending, lower is better
/// 2. **Corpus position** - ascending, for determinism
pub fn compare_results(a: &SearchResult, b: &SearchResult) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| a.ref_index.cmp(&b.ref_index))
}

/// Sort in place and cut to `limit`.
pub fn rank(results: &mut Vec<SearchResult>, limit: usize) {
    results.sort_by(compare_results);
    results.truncate(limit);
}
