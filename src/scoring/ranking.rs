// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! One key only: the combined score, descending. There is no secondary key.
//! Ties keep the order results were produced in, which is corpus order, so
//! the sort must be stable.

use crate::types::SearchResult;
use std::cmp::Ordering;

/// Higher score first. Equal scores compare `Equal` so a stable sort leaves
/// them alone.
pub fn compare_results(a: &SearchResult<'_>, b: &SearchResult<'_>) -> Ordering {
    b.score.total_cmp(&a.score)
}

/// Sort in place, best first. `sort_by` is stable.
pub fn rank(results: &mut [SearchResult<'_>]) {
    results.sort_by(compare_results);
}
