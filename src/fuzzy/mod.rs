// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: the candidate gate.
//!
//! Two layers here: a bounded approximate-substring scorer for one pattern
//! against one field value, and the per-document index that combines field
//! scores into a single distance. Only documents the index admits can ever
//! be returned by a search.

mod approximate;
mod index;

pub use approximate::*;
pub use index::*;

use crate::types::DocId;

/// Approximate matcher over a fixed corpus.
pub trait FuzzyMatcher {
    /// Distance in `[0, 1]` between `query` and document `doc` (0 = exact),
    /// or `None` when no field of the document clears the match threshold.
    fn score(&self, query: &str, doc: DocId) -> Option<f64>;
}
