//! Repeated and concurrent searches agree.

use crate::common::{ids, KB_ENGINE};
use sift::SearchEngine;
use std::sync::Arc;

#[test]
fn test_repeated_search_is_identical() {
    for query in ["return policy", "sales", "customer", "pro"] {
        let first = KB_ENGINE.search(query, None);
        let second = KB_ENGINE.search(query, None);
        assert_eq!(first, second, "query {:?}", query);
    }
}

#[test]
fn test_rebuilt_engine_agrees() {
    let rebuilt = SearchEngine::new(sift::testing::knowledge_base()).unwrap();
    for query in ["return policy", "sales", "warranty claim"] {
        assert_eq!(rebuilt.search(query, None), KB_ENGINE.search(query, None));
    }
}

#[test]
fn test_shared_engine_across_threads() {
    let engine = Arc::new(SearchEngine::new(sift::testing::knowledge_base()).unwrap());
    let expected = ids(&engine.search("sales", None));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                let results = engine.search("sales", None);
                (ids(&results), engine.suggestions("pro"))
            })
        })
        .collect();

    for handle in handles {
        let (found, suggestions) = handle.join().unwrap();
        assert_eq!(found, expected);
        assert_eq!(suggestions.len(), 5);
    }
}
