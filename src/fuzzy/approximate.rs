// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate substring scoring with a location penalty.
//!
//! A pattern may match anywhere inside a field value, but every edit and
//! every character of offset from the start of the field costs:
//!
//! ```text
//! score = errors / pattern_len + start / distance
//! ```
//!
//! The minimum is taken jointly over all alignments with a Sellers-style DP
//! in which row 0 carries the start penalty instead of zero. Costs are kept as
//! integers scaled by `pattern_len × distance`, so equal alignments always
//! compare equal.
//!
//! Two early exits, both sound:
//! 1. Pattern longer than the text: `pattern_len - text_len` edits are
//!    unavoidable, reject if that alone exceeds the threshold
//! 2. Row minimum above the limit: rows never decrease, abandon the DP

/// Floor for non-exact matches. Only a value equal to the pattern scores 0.
pub const MIN_MATCH_SCORE: f64 = 0.001;

const UNREACHABLE: u64 = u64::MAX / 4;

/// Score `pattern` against `text`, or `None` if the best alignment is worse
/// than `threshold`.
///
/// With `distance == 0` only alignments starting at the first character
/// count.
pub fn match_score(pattern: &[char], text: &[char], threshold: f64, distance: u32) -> Option<f64> {
    let m = pattern.len();
    let n = text.len();
    if m == 0 {
        return None;
    }
    if pattern == text {
        return Some(0.0);
    }

    // Early-exit: length surplus is a lower bound on edits
    if m > n && (m - n) as f64 / m as f64 > threshold {
        return None;
    }

    // Scaled costs: one edit = d, one character of offset = m.
    // With distance 0 there is no offset budget at all.
    let (edit, scale) = if distance == 0 {
        (1u64, m as u64)
    } else {
        (u64::from(distance), m as u64 * u64::from(distance))
    };
    let limit = threshold * scale as f64;

    let mut prev: Vec<u64> = (0..=n)
        .map(|j| {
            if distance == 0 {
                if j == 0 {
                    0
                } else {
                    UNREACHABLE
                }
            } else {
                j as u64 * m as u64
            }
        })
        .collect();
    let mut cur = vec![0u64; n + 1];

    for &pc in pattern {
        cur[0] = prev[0].saturating_add(edit);
        let mut min_row = cur[0];

        for j in 1..=n {
            let substitute = if pc == text[j - 1] { 0 } else { edit };
            let best = prev[j - 1]
                .saturating_add(substitute)
                .min(prev[j].saturating_add(edit))
                .min(cur[j - 1].saturating_add(edit));
            cur[j] = best;
            min_row = min_row.min(best);
        }

        // Early-exit: nothing below this row can get cheaper
        if min_row as f64 > limit {
            return None;
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    let best = prev.iter().copied().min().unwrap_or(UNREACHABLE);
    let score = best as f64 / scale as f64;
    if score <= threshold {
        Some(score.max(MIN_MATCH_SCORE))
    } else {
        None
    }
}
