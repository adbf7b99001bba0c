// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term frequency × inverse document frequency over the whole corpus.
//!
//! Each document is indexed as `title + content + tags`, tokenized into
//! lowercase words with English stopwords dropped.
//!
//! ```text
//! tf(t, d)  = occurrences of t in d
//! idf(t)    = 1 + ln(N / (1 + df(t)))
//! tfidf     = tf × idf
//! ```
//!
//! The `+1` outside the log keeps idf positive for every term that occurs
//! at all: `N / (1 + df) > N / (N + 1)`, so `ln(...) > -1`.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::TermWeighting;
use crate::types::{DocId, Document};
use crate::utils::{is_stopword, tokenize};
use std::collections::HashMap;

type TermCounts = HashMap<String, u32>;

#[derive(Debug, Clone, Default)]
pub struct TfIdfIndex {
    term_freqs: Vec<TermCounts>,
    doc_freqs: HashMap<String, u32>,
}

impl TfIdfIndex {
    /// Index every document.
    ///
    /// With the `parallel` feature the per-document counting runs on the rayon
    /// pool (map phase) and document frequencies are merged sequentially
    /// (reduce phase). The result is the same either way.
    pub fn build(docs: &[Document]) -> Self {
        #[cfg(feature = "parallel")]
        let term_freqs: Vec<TermCounts> = docs.par_iter().map(count_terms).collect();
        #[cfg(not(feature = "parallel"))]
        let term_freqs: Vec<TermCounts> = docs.iter().map(count_terms).collect();

        let mut doc_freqs: HashMap<String, u32> = HashMap::new();
        for counts in &term_freqs {
            for term in counts.keys() {
                *doc_freqs.entry(term.clone()).or_default() += 1;
            }
        }

        TfIdfIndex {
            term_freqs,
            doc_freqs,
        }
    }

    pub fn len(&self) -> usize {
        self.term_freqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.term_freqs.is_empty()
    }

    /// Distinct indexed terms across the corpus.
    pub fn vocabulary_size(&self) -> usize {
        self.doc_freqs.len()
    }

    pub fn tf(&self, term: &str, doc: DocId) -> u32 {
        self.term_freqs
            .get(doc.as_usize())
            .and_then(|counts| counts.get(term))
            .copied()
            .unwrap_or(0)
    }

    /// Documents containing `term` at least once.
    pub fn df(&self, term: &str) -> u32 {
        self.doc_freqs.get(term).copied().unwrap_or(0)
    }

    pub fn idf(&self, term: &str) -> f64 {
        let n = self.term_freqs.len();
        if n == 0 {
            return 0.0;
        }
        1.0 + (n as f64 / (1.0 + f64::from(self.df(term)))).ln()
    }

    pub fn tfidf(&self, term: &str, doc: DocId) -> f64 {
        match self.tf(term, doc) {
            0 => 0.0,
            tf => f64::from(tf) * self.idf(term),
        }
    }
}

impl TermWeighting for TfIdfIndex {
    /// Sum over tokens. A token repeated in the query counts each time.
    fn score(&self, tokens: &[String], doc: DocId) -> f64 {
        tokens.iter().map(|token| self.tfidf(token, doc)).sum()
    }
}

fn count_terms(doc: &Document) -> TermCounts {
    let mut counts = TermCounts::new();
    for token in tokenize(&doc.indexed_text()) {
        if !is_stopword(&token) {
            *counts.entry(token).or_default() += 1;
        }
    }
    counts
}
