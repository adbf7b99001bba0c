//! Category filtering.

use crate::common::{ids, scenario_engine, KB_ENGINE};

#[test]
fn test_filter_excludes_other_categories() {
    let engine = scenario_engine();
    assert!(engine.search("return policy", Some("Products")).is_empty());
}

#[test]
fn test_filter_keeps_order_of_unfiltered_results() {
    let all = KB_ENGINE.search("sales", None);
    let products = KB_ENGINE.search("sales", Some("Products"));
    let expected: Vec<String> = all
        .iter()
        .filter(|r| r.document.category == "Products")
        .map(|r| r.document.id.clone())
        .collect();
    assert_eq!(ids(&products), expected);
    assert_eq!(ids(&products), vec!["kb-promotions"]);
}

#[test]
fn test_filter_does_not_change_scores() {
    let all = KB_ENGINE.search("sales", None);
    for filtered in KB_ENGINE.search("sales", Some("Training")) {
        let same = all
            .iter()
            .find(|r| r.document.id == filtered.document.id)
            .expect("filtered result appears unfiltered");
        assert_eq!(same.score, filtered.score);
    }
}

#[test]
fn test_all_sentinel() {
    for query in ["return", "sales", "customer", "retrun polcy"] {
        assert_eq!(
            KB_ENGINE.search(query, Some("all")),
            KB_ENGINE.search(query, None)
        );
    }
}

#[test]
fn test_filter_is_case_sensitive() {
    assert!(KB_ENGINE.search("sales", Some("products")).is_empty());
    assert!(KB_ENGINE.search("sales", Some("Nonexistent")).is_empty());
}
