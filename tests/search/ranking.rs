//! Ranking over the retail knowledge base.

use crate::common::{assert_sorted, ids, scenario_engine, KB_ENGINE};

#[test]
fn test_scenario_single_result() {
    let engine = scenario_engine();
    let results = engine.search("return policy", None);
    assert_eq!(ids(&results), vec!["1"]);
    assert!((results[0].score - 0.9047).abs() < 1e-3, "score {}", results[0].score);
    assert_eq!(results[0].relevance, 90);
}

#[test]
fn test_exact_title_word_ranks_first() {
    let results = KB_ENGINE.search("return", None);
    assert_eq!(ids(&results), vec!["kb-returns"]);
    assert!(results[0].relevance >= 95);
}

#[test]
fn test_tag_heavy_term() {
    let results = KB_ENGINE.search("sales", None);
    assert_eq!(
        ids(&results),
        vec!["kb-electronics", "kb-promotions", "kb-objections"]
    );
    assert_eq!(results[0].relevance, 100);
    assert_sorted(&results);
}

#[test]
fn test_shared_tag_documents_both_match() {
    let results = KB_ENGINE.search("promotions", None);
    let found = ids(&results);
    assert_eq!(found.len(), 2);
    assert!(found.contains(&"kb-promotions".to_string()));
    assert!(found.contains(&"kb-loyalty".to_string()));
}

#[test]
fn test_title_match_beats_content_mentions() {
    let results = KB_ENGINE.search("customer", None);
    assert_eq!(
        ids(&results),
        vec!["kb-objections", "kb-electronics", "kb-returns"]
    );
    assert!(results[0].relevance > results[1].relevance);
}

#[test]
fn test_typos_still_find_the_document() {
    // Neither misspelt token is in the vocabulary, so only the fuzzy side scores
    let results = KB_ENGINE.search("retrun polcy", None);
    assert_eq!(ids(&results), vec!["kb-returns"]);
    assert!(results[0].relevance < 60);
}

#[test]
fn test_unrelated_query_finds_nothing() {
    assert!(KB_ENGINE.search("xyzzy", None).is_empty());
}

#[test]
fn test_relevance_is_rounded_score() {
    for query in ["return", "sales", "customer", "stock"] {
        for result in KB_ENGINE.search(query, None) {
            assert!(result.relevance <= 100);
            assert_eq!(
                u32::from(result.relevance),
                (result.score * 100.0).round() as u32
            );
        }
    }
}
