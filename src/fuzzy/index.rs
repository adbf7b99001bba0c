// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-document fuzzy index over title, content and tags.
//!
//! Each document contributes one entry per field value: its title, its
//! content, and every tag separately. A document's distance combines the
//! values that matched:
//!
//! ```text
//! distance = Π over matched values of  max(score, ε) ^ (key_weight × norm)
//! ```
//!
//! `key_weight` is `1 / 3` (three equally weighted keys) and `norm` damps long
//! values (see [`crate::utils::field_norm`]). Every factor lies in `[0, 1]`, so
//! more matching values push the distance toward 0, and so does a match in a
//! short value.

use super::{match_score, FuzzyMatcher};
use crate::config::SearchConfig;
use crate::types::{DocId, Document};
use crate::utils::{field_norm, fold};

/// Number of searchable keys: title, content, tags.
const KEY_COUNT: usize = 3;

/// Which document field a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Title,
    Content,
    Tag,
}

#[derive(Debug, Clone)]
struct FieldValue {
    key: FieldKey,
    chars: Vec<char>,
    norm: f64,
}

#[derive(Debug, Clone)]
pub struct FuzzyIndex {
    entries: Vec<Vec<FieldValue>>,
    threshold: f64,
    distance: u32,
    ignore_diacritics: bool,
    key_weight: f64,
}

impl FuzzyIndex {
    pub fn build(docs: &[Document], config: &SearchConfig) -> Self {
        let fold_value = |key: FieldKey, value: &str| FieldValue {
            key,
            chars: fold(value, config.ignore_diacritics),
            norm: field_norm(value),
        };

        let entries = docs
            .iter()
            .map(|doc| {
                let mut values = Vec::with_capacity(2 + doc.tags.len());
                values.push(fold_value(FieldKey::Title, &doc.title));
                values.push(fold_value(FieldKey::Content, &doc.content));
                values.extend(doc.tags.iter().map(|tag| fold_value(FieldKey::Tag, tag)));
                values
            })
            .collect();

        FuzzyIndex {
            entries,
            threshold: config.threshold,
            distance: config.distance,
            ignore_diacritics: config.ignore_diacritics,
            key_weight: 1.0 / KEY_COUNT as f64,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Which fields of `doc` matched the query, with their raw scores.
    ///
    /// Debugging aid for explaining a ranking; search itself only needs the
    /// combined distance.
    pub fn matched_fields(&self, query: &str, doc: DocId) -> Vec<(FieldKey, f64)> {
        let pattern = fold(query, self.ignore_diacritics);
        self.entries
            .get(doc.as_usize())
            .into_iter()
            .flatten()
            .filter_map(|value| {
                match_score(&pattern, &value.chars, self.threshold, self.distance)
                    .map(|score| (value.key, score))
            })
            .collect()
    }

    fn distance_folded(&self, pattern: &[char], doc: DocId) -> Option<f64> {
        let values = self.entries.get(doc.as_usize())?;
        let mut total = 1.0;
        let mut matched = false;

        for value in values {
            if let Some(score) = match_score(pattern, &value.chars, self.threshold, self.distance)
            {
                matched = true;
                let base = if score == 0.0 { f64::EPSILON } else { score };
                total *= base.powf(self.key_weight * value.norm);
            }
        }

        matched.then_some(total)
    }
}

impl FuzzyMatcher for FuzzyIndex {
    fn score(&self, query: &str, doc: DocId) -> Option<f64> {
        let pattern = fold(query, self.ignore_diacritics);
        self.distance_folded(&pattern, doc)
    }
}
