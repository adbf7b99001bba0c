// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the approximate matcher.
//!
//! Checks that scores stay within the threshold and that identical inputs
//! always score as exact matches, for arbitrary Unicode input.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sift::match_score;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    pattern: String,
    text: String,
    threshold: u8,
    distance: u16,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let pattern: Vec<char> = input.pattern.chars().take(50).collect();
    let text: Vec<char> = input.text.chars().take(200).collect();
    let threshold = f64::from(input.threshold) / 255.0;
    let distance = u32::from(input.distance);

    if let Some(score) = match_score(&pattern, &text, threshold, distance) {
        assert!(!pattern.is_empty());
        // Inexact matches are floored at 0.001
        assert!(score >= 0.0 && score <= threshold.max(0.001) + 1e-9);
        if score == 0.0 {
            assert_eq!(pattern, text);
        }
    }

    if !pattern.is_empty() {
        assert_eq!(match_score(&pattern, &pattern, threshold, distance), Some(0.0));
    }
});
