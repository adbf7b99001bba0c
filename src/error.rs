// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for constructing an engine and loading its inputs.
//!
//! Searching never fails. An empty query, an empty corpus or a filter that
//! matches nothing all produce empty results. The only faults are a corpus
//! or config that breaks the engine's invariants, and I/O on the way in.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Document id is empty or whitespace.
    #[error("document at position {position} has a blank id")]
    BlankId { position: usize },

    /// Two documents share an id.
    #[error("duplicate document id: {id}")]
    DuplicateId { id: String },

    /// Category is empty or whitespace.
    #[error("document {id} has a blank category")]
    BlankCategory { id: String },

    /// Category collides with the "all" filter sentinel and could never be
    /// filtered for.
    #[error("document {id} uses the reserved category \"all\"")]
    ReservedCategory { id: String },

    /// A tag label is empty or whitespace.
    #[error("document {id} has a blank tag at position {position}")]
    BlankTag { id: String, position: usize },

    /// Corpus does not fit the 32-bit document id space.
    #[error("corpus has {count} documents, more than the engine can address")]
    TooManyDocuments { count: usize },

    /// Config value out of range.
    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
