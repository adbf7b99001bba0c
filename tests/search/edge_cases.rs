//! Edge cases: empty input, odd characters, tiny corpora.

use crate::common::{engine_over, ids, make_doc, KB_ENGINE};
use sift::{Document, SearchEngine};

#[test]
fn test_blank_queries() {
    for query in ["", " ", "\t\n", "?!", "- - -"] {
        assert!(KB_ENGINE.search(query, None).is_empty(), "query {:?}", query);
    }
}

#[test]
fn test_empty_corpus() {
    let engine = SearchEngine::new(Vec::new()).unwrap();
    assert!(engine.search("return", None).is_empty());
    assert!(engine.suggestions("re").is_empty());
    assert!(engine.related_topics("re").is_empty());
}

#[test]
fn test_query_case_is_ignored() {
    assert_eq!(
        ids(&KB_ENGINE.search("RETURN", None)),
        ids(&KB_ENGINE.search("return", None))
    );
}

#[test]
fn test_stopword_only_query_uses_fuzzy_alone() {
    let engine = engine_over(vec![make_doc("1", "The")]);
    let results = engine.search("the", None);
    assert_eq!(ids(&results), vec!["1"]);
    // Exact title match, TF-IDF contributes nothing
    assert_eq!(results[0].relevance, 60);
}

#[test]
fn test_document_without_tags() {
    let engine = engine_over(vec![Document::new(
        "1",
        "Gift Cards",
        "Gift cards never expire",
        "Policies",
        Vec::<String>::new(),
    )]);
    assert_eq!(ids(&engine.search("gift cards", None)), vec!["1"]);
    assert!(engine.related_topics("").is_empty());
}

#[test]
fn test_unicode_text() {
    let engine = engine_over(vec![Document::new(
        "1",
        "Crème brûlée",
        "Dessert du jour",
        "Menu",
        ["dessert"],
    )]);
    assert_eq!(ids(&engine.search("crème", None)), vec!["1"]);
    assert_eq!(engine.suggestions("brû"), vec!["brûlée"]);
}
