// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `SearchEngine`: build once, read concurrently.
//!
//! Construction validates the corpus and config and then builds both
//! indexes. The engine value does not exist until that is done, so a
//! half-built index can never be observed. After that every operation takes
//! `&self` and nothing is mutated, so a shared `&SearchEngine` (or an
//! `Arc`) can serve any number of threads without locks.

use crate::config::SearchConfig;
use crate::corpus::validate_documents;
use crate::error::Result;
use crate::fuzzy::{FuzzyIndex, FuzzyMatcher};
use crate::scoring::ranking::rank;
use crate::scoring::{
    combined_score, fuzzy_similarity, normalize_by_max, relevance, BlendWeights, TermWeighting,
    TfIdfIndex,
};
use crate::search::{suggest, topics};
use crate::types::{CategoryFilter, DocId, Document, SearchResult};
use crate::utils::{has_word_chars, tokenize};
use tracing::{debug, trace};

/// Hybrid fuzzy + TF-IDF search over an immutable corpus.
///
/// The matcher and the weighting are type parameters so either can be
/// replaced (see [`SearchEngine::from_parts`]) without touching the blending
/// logic.
#[derive(Debug, Clone)]
pub struct SearchEngine<F = FuzzyIndex, W = TfIdfIndex> {
    documents: Vec<Document>,
    fuzzy: F,
    weighting: W,
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(documents: Vec<Document>) -> Result<Self> {
        Self::with_config(documents, SearchConfig::default())
    }

    pub fn with_config(documents: Vec<Document>, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        validate_documents(&documents)?;

        let fuzzy = FuzzyIndex::build(&documents, &config);
        let weighting = TfIdfIndex::build(&documents);
        debug!(
            documents = documents.len(),
            vocabulary = weighting.vocabulary_size(),
            threshold = config.threshold,
            distance = config.distance,
            "built search engine"
        );

        Ok(SearchEngine {
            documents,
            fuzzy,
            weighting,
            config,
        })
    }

    /// The fuzzy index, e.g. for [`FuzzyIndex::matched_fields`].
    pub fn fuzzy_index(&self) -> &FuzzyIndex {
        &self.fuzzy
    }
}

impl<F: FuzzyMatcher, W: TermWeighting> SearchEngine<F, W> {
    /// Assemble an engine from caller-supplied indexes.
    ///
    /// Both must have been built over exactly `documents`, in order: the
    /// engine asks them about `DocId(0..documents.len())`.
    pub fn from_parts(
        documents: Vec<Document>,
        fuzzy: F,
        weighting: W,
        config: SearchConfig,
    ) -> Result<Self> {
        config.validate()?;
        validate_documents(&documents)?;
        Ok(SearchEngine {
            documents,
            fuzzy,
            weighting,
            config,
        })
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Rank the corpus against `query`.
    ///
    /// `category` of `None` or `Some("all")` disables filtering. Only
    /// documents that clear the fuzzy threshold can appear; TF-IDF moves them
    /// around but never adds any. Equal scores keep corpus order.
    pub fn search(&self, query: &str, category: Option<&str>) -> Vec<SearchResult<'_>> {
        let filter = CategoryFilter::from(category);
        if !has_word_chars(query) {
            debug!(query, "query has no word characters");
            return Vec::new();
        }

        let candidates: Vec<(DocId, f64)> = self
            .doc_ids()
            .filter_map(|id| self.fuzzy.score(query, id).map(|distance| (id, distance)))
            .collect();
        if candidates.is_empty() {
            debug!(query, candidates = 0, "search");
            return Vec::new();
        }

        let tokens = tokenize(query);
        let raw: Vec<f64> = self
            .doc_ids()
            .map(|id| self.weighting.score(&tokens, id))
            .collect();
        let tfidf = normalize_by_max(&raw);

        let weights = BlendWeights {
            fuzzy: self.config.fuzzy_weight,
            tfidf: self.config.tfidf_weight,
        };
        let admitted = candidates.len();
        let mut results: Vec<SearchResult<'_>> = candidates
            .into_iter()
            .filter_map(|(id, distance)| {
                let document = &self.documents[id.as_usize()];
                if !filter.admits(document) {
                    return None;
                }
                let fuzzy = fuzzy_similarity(distance);
                let tfidf = tfidf[id.as_usize()];
                let score = combined_score(fuzzy, tfidf, weights);
                trace!(id = %document.id, fuzzy, tfidf, score, "candidate");
                Some(SearchResult {
                    document,
                    score,
                    relevance: relevance(score),
                })
            })
            .collect();

        rank(&mut results);
        debug!(query, ?category, candidates = admitted, returned = results.len(), "search");
        results
    }

    /// [`search`](Self::search), keeping only the top `limit` results.
    pub fn search_with_limit(
        &self,
        query: &str,
        category: Option<&str>,
        limit: usize,
    ) -> Vec<SearchResult<'_>> {
        let mut results = self.search(query, category);
        results.truncate(limit);
        results
    }

    /// Up to `max_suggestions` title/content words that start with a word of
    /// `query`, in first-seen order.
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        suggest::suggestions(&self.documents, query, self.config.max_suggestions)
    }

    /// The corpus's most used tags, up to `max_topics`.
    ///
    /// The query does not influence the ranking: every query gets the same
    /// answer for the same corpus.
    pub fn related_topics(&self, _query: &str) -> Vec<String> {
        topics::related_topics(&self.documents, self.config.max_topics)
    }

    /// Every tag with its occurrence count, in topic ranking order.
    pub fn topic_counts(&self) -> Vec<(String, usize)> {
        topics::topic_counts(&self.documents)
    }

    fn doc_ids(&self) -> impl Iterator<Item = DocId> {
        // validate_documents guarantees the length fits in u32
        (0..self.documents.len() as u32).map(DocId)
    }
}
