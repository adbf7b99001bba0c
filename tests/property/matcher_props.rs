//! Properties of the approximate matcher.

use proptest::prelude::*;
use sift::match_score;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

proptest! {
    #[test]
    fn prop_identical_is_exact(s in "[a-z]{1,20}") {
        let c = chars(&s);
        prop_assert_eq!(match_score(&c, &c, 0.3, 100), Some(0.0));
    }

    #[test]
    fn prop_prefix_occurrence_matches(s in "[a-z]{1,10}", tail in "[a-z ]{1,10}") {
        let text = chars(&format!("{}{}", s, tail));
        let score = match_score(&chars(&s), &text, 0.3, 100);
        prop_assert_eq!(score, Some(0.001));
    }

    #[test]
    fn prop_score_within_threshold(p in "[a-c]{1,6}", t in "[a-c ]{0,30}", threshold in 0.0f64..=1.0) {
        if let Some(score) = match_score(&chars(&p), &chars(&t), threshold, 100) {
            prop_assert!(score >= 0.0);
            // Inexact matches are floored at 0.001 even under a tighter threshold
            prop_assert!(score <= threshold.max(0.001) + 1e-12);
        }
    }

    #[test]
    fn prop_looser_threshold_never_loses_matches(p in "[a-c]{1,6}", t in "[a-c ]{0,30}") {
        let strict = match_score(&chars(&p), &chars(&t), 0.2, 100);
        let loose = match_score(&chars(&p), &chars(&t), 0.6, 100);
        if strict.is_some() {
            prop_assert!(loose.is_some());
        }
    }
}
