// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus loading and validation.
//!
//! The engine refuses to index a corpus that breaks the document invariants
//! (see [`crate::types`]). Catching a blank id or a duplicate here is far
//! cheaper than explaining a confusing ranking later.
//!
//! On disk a corpus is JSON, either a bare array of documents or an object
//! with a `documents` array:
//!
//! ```json
//! { "documents": [ { "id": "kb-1", "title": "...", "content": "...",
//!                    "category": "Policies", "tags": ["returns"] } ] }
//! ```

use crate::error::{Error, Result};
use crate::types::{Document, ALL_CATEGORIES};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum CorpusFile {
    Bare(Vec<Document>),
    Wrapped { documents: Vec<Document> },
}

/// Read, parse and validate a corpus file.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let documents = parse_corpus(&raw).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    validate_documents(&documents)?;
    tracing::debug!(path = %path.display(), documents = documents.len(), "loaded corpus");
    Ok(documents)
}

/// Parse corpus JSON without validating it.
pub fn parse_corpus(raw: &str) -> std::result::Result<Vec<Document>, serde_json::Error> {
    let file: CorpusFile = serde_json::from_str(raw)?;
    Ok(match file {
        CorpusFile::Bare(documents) | CorpusFile::Wrapped { documents } => documents,
    })
}

/// Check every document invariant. Stops at the first violation.
pub fn validate_documents(documents: &[Document]) -> Result<()> {
    if u32::try_from(documents.len()).is_err() {
        return Err(Error::TooManyDocuments {
            count: documents.len(),
        });
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(documents.len());
    for (position, doc) in documents.iter().enumerate() {
        if doc.id.trim().is_empty() {
            return Err(Error::BlankId { position });
        }
        if !seen.insert(doc.id.as_str()) {
            return Err(Error::DuplicateId { id: doc.id.clone() });
        }
        if doc.category.trim().is_empty() {
            return Err(Error::BlankCategory { id: doc.id.clone() });
        }
        if doc.category == ALL_CATEGORIES {
            return Err(Error::ReservedCategory { id: doc.id.clone() });
        }
        if let Some(position) = doc.tags.iter().position(|tag| tag.trim().is_empty()) {
            return Err(Error::BlankTag {
                id: doc.id.clone(),
                position,
            });
        }
    }
    Ok(())
}
