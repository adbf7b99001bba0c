// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tag popularity across the whole corpus.
//!
//! Every occurrence counts, including a tag repeated inside one document.
//! Ranking is by count descending, with ties broken by first occurrence
//! (document order, then tag order).

use crate::types::Document;
use std::collections::HashMap;

/// Every tag with its count, best first.
pub fn topic_counts(documents: &[Document]) -> Vec<(String, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut slot: HashMap<&str, usize> = HashMap::new();

    for doc in documents {
        for tag in &doc.tags {
            match slot.get(tag.as_str()) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    slot.insert(tag.as_str(), counts.len());
                    counts.push((tag.as_str(), 1));
                }
            }
        }
    }

    // Stable: equal counts stay in first-occurrence order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect()
}

/// The top `limit` tag labels.
pub fn related_topics(documents: &[Document], limit: usize) -> Vec<String> {
    topic_counts(documents)
        .into_iter()
        .take(limit)
        .map(|(tag, _)| tag)
        .collect()
}
