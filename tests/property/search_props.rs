//! Invariants of `SearchEngine::search`.

use crate::common::{assert_sorted, engine_over};
use crate::strategies::{category, corpus, query};
use proptest::prelude::*;
use sift::{DocId, FuzzyMatcher};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_results_are_unique_corpus_members(docs in corpus(), q in query()) {
        let engine = engine_over(docs.clone());
        let results = engine.search(&q, None);
        let mut seen = std::collections::HashSet::new();
        for result in &results {
            prop_assert!(docs.contains(result.document));
            prop_assert!(seen.insert(result.document.id.clone()));
        }
    }

    #[test]
    fn prop_scores_bounded_and_sorted(docs in corpus(), q in query()) {
        let engine = engine_over(docs);
        let results = engine.search(&q, None);
        for result in &results {
            prop_assert!((0.0..=1.0).contains(&result.score));
            prop_assert!(result.relevance <= 100);
        }
        assert_sorted(&results);
    }

    #[test]
    fn prop_results_pass_fuzzy_gate(docs in corpus(), q in query()) {
        let engine = engine_over(docs);
        let results = engine.search(&q, None);
        let admitted = (0..engine.len() as u32)
            .filter(|&i| engine.fuzzy_index().score(&q, DocId(i)).is_some())
            .count();
        prop_assert_eq!(results.len(), admitted);
    }

    #[test]
    fn prop_all_sentinel_equals_no_filter(docs in corpus(), q in query()) {
        let engine = engine_over(docs);
        prop_assert_eq!(engine.search(&q, Some("all")), engine.search(&q, None));
    }

    #[test]
    fn prop_category_filter_is_subsequence(docs in corpus(), q in query(), cat in category()) {
        let engine = engine_over(docs);
        let unfiltered = engine.search(&q, None);
        let filtered = engine.search(&q, Some(&cat));
        let expected: Vec<_> = unfiltered
            .into_iter()
            .filter(|r| r.document.category == cat)
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn prop_search_is_idempotent(docs in corpus(), q in query()) {
        let engine = engine_over(docs);
        prop_assert_eq!(engine.search(&q, None), engine.search(&q, None));
    }
}
