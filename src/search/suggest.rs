// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix completions mined from titles and content.
//!
//! Tags are not mined here, although the TF-IDF index does read them.
//! Neither the fuzzy threshold nor a category filter applies.
//!
//! Order is first-seen: documents in corpus order, then query tokens in query
//! order, then document tokens in text order. A word already suggested is
//! skipped, and collection stops at the limit.

use crate::types::Document;
use crate::utils::tokenize;
use std::collections::HashSet;

pub fn suggestions(documents: &[Document], query: &str, limit: usize) -> Vec<String> {
    let query_tokens = tokenize(query);
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();
    if query_tokens.is_empty() || limit == 0 {
        return out;
    }

    for doc in documents {
        let doc_tokens = tokenize(&doc.suggestion_text());
        for prefix in &query_tokens {
            for token in &doc_tokens {
                if token.starts_with(prefix.as_str()) && seen.insert(token.clone()) {
                    out.push(token.clone());
                    if out.len() == limit {
                        return out;
                    }
                }
            }
        }
    }
    out
}
