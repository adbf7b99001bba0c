//! Query completion.

use crate::common::{engine_over, make_doc, scenario_engine, KB_ENGINE};

#[test]
fn test_prefix_completions_in_corpus_order() {
    assert_eq!(
        KB_ENGINE.suggestions("pro"),
        vec!["process", "product", "promotions", "protection", "program"]
    );
    assert_eq!(
        KB_ENGINE.suggestions("re"),
        vec!["return", "receipt", "restocking", "respond", "replenishment"]
    );
}

#[test]
fn test_capped_at_five() {
    let suggestions = KB_ENGINE.suggestions("c");
    assert_eq!(
        suggestions,
        vec!["customers", "carry", "claims", "claim", "competitors"]
    );
}

#[test]
fn test_every_query_word_contributes() {
    assert_eq!(KB_ENGINE.suggestions("sa st"), vec!["stock", "sales", "safety"]);
}

#[test]
fn test_tags_are_not_suggested() {
    // "upselling" only appears as a tag
    assert!(KB_ENGINE.suggestions("ups").is_empty());
}

#[test]
fn test_scenario_suggestion() {
    assert_eq!(scenario_engine().suggestions("pro"), vec!["promotions"]);
}

#[test]
fn test_suggestions_are_lowercase_and_unique() {
    let engine = engine_over(vec![make_doc("1", "Shipping SHIPPING shipping")]);
    assert_eq!(engine.suggestions("SHIP"), vec!["shipping"]);
}

#[test]
fn test_no_words_no_suggestions() {
    assert!(KB_ENGINE.suggestions("").is_empty());
    assert!(KB_ENGINE.suggestions("  --  ").is_empty());
}
