// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hybrid fuzzy + TF-IDF relevance search for small in-memory knowledge bases.
//!
//! A [`SearchEngine`] is built once from a corpus of [`Document`]s and then
//! answers three read-only questions: which documents match a query, which
//! words complete it, and which tags dominate the corpus.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────────┐     ┌────────────────┐
//! │  corpus.rs  │────▶│   fuzzy/      │────▶│                │
//! │ (validate,  │     │ (FuzzyIndex:  │     │   search/      │
//! │  load JSON) │     │  gate)        │     │ (SearchEngine: │
//! └─────────────┘     ├───────────────┤     │  blend, filter,│
//!        │            │   scoring/    │────▶│  rank)         │
//!        ▼            │ (TfIdfIndex:  │     │                │
//! ┌─────────────┐     │  re-weight)   │     │ suggest.rs     │
//! │  config.rs  │────▶└───────────────┘     │ topics.rs      │
//! └─────────────┘                           └────────────────┘
//! ```
//!
//! # Scoring
//!
//! | Stage     | Output                | Role                                    |
//! |-----------|-----------------------|-----------------------------------------|
//! | fuzzy     | distance in `[0, 1]`  | decides membership (threshold 0.3)      |
//! | TF-IDF    | raw sum over tokens   | normalized by the per-query maximum     |
//! | blend     | `0.6 f + 0.4 t`       | sort key, stable on ties                |
//!
//! # Usage
//!
//! ```
//! use sift::{Document, SearchEngine};
//!
//! let engine = SearchEngine::new(vec![
//!     Document::new("1", "Return Policy Guidelines", "30-day return policy",
//!                   "Policies", ["returns", "policy"]),
//!     Document::new("2", "Current Promotions", "20% off apparel",
//!                   "Products", ["promotions", "sales"]),
//! ])?;
//!
//! let results = engine.search("return policy", None);
//! assert_eq!(results[0].document.id, "1");
//! assert!(engine.search("return policy", Some("Products")).is_empty());
//! assert_eq!(engine.suggestions("pro"), vec!["promotions"]);
//! # Ok::<(), sift::Error>(())
//! ```

pub mod config;
pub mod corpus;
mod error;
pub mod fuzzy;
pub mod scoring;
mod search;
pub mod testing;
mod types;
pub mod utils;

// Re-exports for public API
pub use config::SearchConfig;
pub use corpus::{load_corpus, parse_corpus, validate_documents};
pub use error::{Error, Result};
pub use fuzzy::{match_score, FieldKey, FuzzyIndex, FuzzyMatcher};
pub use scoring::{BlendWeights, TermWeighting, TfIdfIndex};
pub use search::{suggest, topics, SearchEngine};
pub use types::{CategoryFilter, DocId, Document, SearchResult, ALL_CATEGORIES};
pub use utils::tokenize;
