// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at all three query operations over the
//! retail knowledge base. Emoji, combining marks and null bytes must never
//! panic or produce an out-of-range score.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sift::testing::knowledge_base;
use sift::SearchEngine;
use std::collections::HashSet;

fuzz_target!(|query: &[u8]| {
    static ENGINE: std::sync::OnceLock<SearchEngine> = std::sync::OnceLock::new();
    let engine = ENGINE
        .get_or_init(|| SearchEngine::new(knowledge_base()).expect("knowledge base is valid"));

    // Cap length in chars, not bytes, to stay on a boundary
    let query: String = String::from_utf8_lossy(query).chars().take(200).collect();

    let results = engine.search(&query, None);

    // INVARIANT 1: scores are in [0, 1] and relevance is a percentage
    for result in &results {
        assert!((0.0..=1.0).contains(&result.score), "score {}", result.score);
        assert!(result.relevance <= 100);
    }

    // INVARIANT 2: sorted by score, descending
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }

    // INVARIANT 3: no document appears twice
    let mut seen = HashSet::new();
    for result in &results {
        assert!(seen.insert(result.document.id.as_str()));
    }

    // INVARIANT 4: "all" is the same as no filter
    assert_eq!(results, engine.search(&query, Some("all")));

    // INVARIANT 5: listings respect their limits and topics ignore the query
    assert!(engine.suggestions(&query).len() <= engine.config().max_suggestions);
    assert_eq!(engine.related_topics(&query), engine.related_topics(""));
});
