//! Suggestions and topics.

use crate::common::engine_over;
use crate::strategies::{corpus, query};
use proptest::prelude::*;
use sift::tokenize;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_suggestions_complete_a_query_word(docs in corpus(), q in query()) {
        let engine = engine_over(docs.clone());
        let suggestions = engine.suggestions(&q);
        prop_assert!(suggestions.len() <= 5);

        let prefixes = tokenize(&q);
        let mut unique = suggestions.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), suggestions.len());

        for word in &suggestions {
            prop_assert!(prefixes.iter().any(|p| word.starts_with(p.as_str())));
            let word_in_corpus = docs.iter().any(|d| {
                tokenize(&format!("{} {}", d.title, d.content)).contains(word)
            });
            prop_assert!(word_in_corpus);
        }
    }

    #[test]
    fn prop_topics_ignore_query(docs in corpus(), a in query(), b in query()) {
        let engine = engine_over(docs);
        prop_assert_eq!(engine.related_topics(&a), engine.related_topics(&b));
    }

    #[test]
    fn prop_topics_are_distinct_tags(docs in corpus()) {
        let engine = engine_over(docs.clone());
        let topics = engine.related_topics("");
        prop_assert!(topics.len() <= 5);

        let counts = engine.topic_counts();
        for pair in counts.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
        for topic in &topics {
            prop_assert!(docs.iter().any(|d| d.tags.contains(topic)));
        }
    }
}
