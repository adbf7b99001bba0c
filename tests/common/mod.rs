//! Shared test utilities and fixtures.

#![allow(dead_code)]

use sift::{Document, SearchEngine, SearchResult};
use std::sync::LazyLock;

// Re-export canonical fixtures from sift::testing
pub use sift::testing::{knowledge_base, make_doc, make_doc_with_category, scenario_corpus};

/// Engine over the retail knowledge base, built once per test binary.
pub static KB_ENGINE: LazyLock<SearchEngine> = LazyLock::new(|| {
    SearchEngine::new(knowledge_base()).expect("knowledge base is a valid corpus")
});

pub fn scenario_engine() -> SearchEngine {
    SearchEngine::new(scenario_corpus()).expect("scenario corpus is valid")
}

pub fn engine_over(documents: Vec<Document>) -> SearchEngine {
    SearchEngine::new(documents).expect("test corpus is valid")
}

/// Result ids in rank order.
pub fn ids(results: &[SearchResult<'_>]) -> Vec<String> {
    results.iter().map(|r| r.document.id.clone()).collect()
}

/// Assert scores never increase down the list.
pub fn assert_sorted(results: &[SearchResult<'_>]) {
    for pair in results.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "results out of order: {} ({}) before {} ({})",
            pair[0].document.id,
            pair[0].score,
            pair[1].document.id,
            pair[1].score
        );
    }
}
