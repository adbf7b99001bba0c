// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Fuzzy distance decides *whether* a document is a result. TF-IDF only
//! moves documents the fuzzy gate already let through. The two are blended
//! 60/40 into one score in `[0, 1]`, then sorted.

mod core;
pub mod ranking;
mod tfidf;

pub use core::*;
pub use tfidf::*;

use crate::types::DocId;

/// Statistical term weighting over a fixed corpus.
pub trait TermWeighting {
    /// Raw, unnormalized relevance of `doc` to the query `tokens`.
    /// Non-negative; 0 when no token occurs in the document.
    fn score(&self, tokens: &[String], doc: DocId) -> f64;
}
