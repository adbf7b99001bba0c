// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind the blended score.
//!
//! ```text
//! fuzzy    = 1 - distance                   (1 = exact)
//! tfidf    = raw / max(raw over corpus)     (0 when the max is 0)
//! combined = fuzzy_weight × fuzzy + tfidf_weight × tfidf
//! relevance = round(combined × 100)
//! ```
//!
//! With weights summing to 1 and both inputs in `[0, 1]`, `combined` stays in
//! `[0, 1]` and `relevance` in `0..=100`. The clamps below only guard against
//! a custom matcher or weighting that strays outside its contract.

/// Blend weights, validated by [`crate::config::SearchConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendWeights {
    pub fuzzy: f64,
    pub tfidf: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        BlendWeights {
            fuzzy: crate::config::DEFAULT_FUZZY_WEIGHT,
            tfidf: crate::config::DEFAULT_TFIDF_WEIGHT,
        }
    }
}

/// Flip a distance (0 = exact) into a similarity (1 = exact).
pub fn fuzzy_similarity(distance: f64) -> f64 {
    (1.0 - distance).clamp(0.0, 1.0)
}

/// Divide every score by the maximum. An all-zero (or empty) slice stays all
/// zero instead of dividing by zero.
pub fn normalize_by_max(raw: &[f64]) -> Vec<f64> {
    let max = raw.iter().copied().fold(0.0_f64, f64::max);
    if max > 0.0 {
        raw.iter().map(|score| (score / max).clamp(0.0, 1.0)).collect()
    } else {
        vec![0.0; raw.len()]
    }
}

pub fn combined_score(fuzzy: f64, tfidf: f64, weights: BlendWeights) -> f64 {
    (weights.fuzzy * fuzzy + weights.tfidf * tfidf).clamp(0.0, 1.0)
}

/// Display relevance: the combined score as a rounded percentage.
pub fn relevance(combined: f64) -> u8 {
    (combined * 100.0).round().clamp(0.0, 100.0) as u8
}
