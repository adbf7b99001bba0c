//! Related topics.

use crate::common::{engine_over, scenario_engine, KB_ENGINE};
use sift::testing::make_doc_with_tags;

#[test]
fn test_scenario_topics() {
    assert_eq!(
        scenario_engine().related_topics("return policy"),
        vec!["returns", "policy", "promotions", "sales"]
    );
}

#[test]
fn test_most_used_tags_first() {
    assert_eq!(
        KB_ENGINE.related_topics("anything"),
        vec!["sales", "policy", "promotions", "returns", "receipts"]
    );
}

#[test]
fn test_query_does_not_matter() {
    let baseline = KB_ENGINE.related_topics("");
    for query in ["warranty", "stock", "xyzzy", "🙂"] {
        assert_eq!(KB_ENGINE.related_topics(query), baseline);
    }
}

#[test]
fn test_counts_behind_the_ranking() {
    let counts = KB_ENGINE.topic_counts();
    assert_eq!(counts[0], ("sales".to_string(), 3));
    assert_eq!(counts[1], ("policy".to_string(), 2));
    assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 24);
}

#[test]
fn test_ties_keep_first_occurrence() {
    let engine = engine_over(vec![
        make_doc_with_tags("1", &["b", "a"]),
        make_doc_with_tags("2", &["a", "c", "b"]),
    ]);
    assert_eq!(engine.related_topics(""), vec!["b", "a", "c"]);
}
