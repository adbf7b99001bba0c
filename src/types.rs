// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the engine: documents, ids, results, filters.
//!
//! # Invariants
//!
//! - **Document**: `id`, `category` and every tag are non-blank, ids are unique
//!   within a corpus, and `category` is never the `all` sentinel. Checked once by
//!   [`crate::corpus::validate_documents`] before any index is built.
//!
//! - **DocId**: `doc_id < corpus.len()`. It is the document's position in the
//!   corpus, and both indexes are keyed by it.
//!
//! - **SearchResult**: `0.0 <= score <= 1.0 ∧ relevance = round(score × 100)`.

use serde::{Deserialize, Serialize};

/// Category label meaning "no filtering".
pub const ALL_CATEGORIES: &str = "all";

// =============================================================================
// NEWTYPES
// =============================================================================

/// Position of a document in the corpus.
///
/// Prevents accidentally passing a token count or a result rank where a
/// document is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct DocId(pub u32);

impl DocId {
    /// Create a new DocId, validating it's within bounds.
    #[inline]
    pub fn new(id: u32, num_docs: usize) -> Option<Self> {
        if (id as usize) < num_docs {
            Some(DocId(id))
        } else {
            None
        }
    }

    /// Convert to usize for slice indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for DocId {
    fn from(id: u32) -> Self {
        DocId(id)
    }
}

impl From<DocId> for usize {
    fn from(id: DocId) -> Self {
        id.0 as usize
    }
}

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// One knowledge-base entry.
///
/// Every field is required on the wire. There are no serde defaults, so a
/// payload missing `tags` is rejected at parse time rather than silently
/// indexed with no tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Document {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            category: category.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Text fed to the term-weighting index: title, content, then tags.
    pub(crate) fn indexed_text(&self) -> String {
        let mut text = format!("{} {}", self.title, self.content);
        for tag in &self.tags {
            text.push(' ');
            text.push_str(tag);
        }
        text
    }

    /// Text mined for suggestions. Tags are deliberately left out.
    pub(crate) fn suggestion_text(&self) -> String {
        format!("{} {}", self.title, self.content)
    }
}

/// A ranked hit.
///
/// `score` is the blended fuzzy/TF-IDF value used as the sort key;
/// `relevance` is the same number as a 0-100 integer for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<'a> {
    #[serde(flatten)]
    pub document: &'a Document,
    pub score: f64,
    pub relevance: u8,
}

// =============================================================================
// FILTERS
// =============================================================================

/// Post-filter applied after scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<'a> {
    All,
    Only(&'a str),
}

impl CategoryFilter<'_> {
    pub fn admits(&self, doc: &Document) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => doc.category == *category,
        }
    }
}

impl<'a> From<Option<&'a str>> for CategoryFilter<'a> {
    fn from(category: Option<&'a str>) -> Self {
        match category {
            None | Some(ALL_CATEGORIES) => CategoryFilter::All,
            Some(category) => CategoryFilter::Only(category),
        }
    }
}
