// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The engine and its three read paths.
//!
//! `search` gates on fuzzy matching and re-weights with TF-IDF. Suggestions
//! and related topics read the corpus directly and never consult either
//! index.

mod engine;
pub mod suggest;
pub mod topics;

pub use engine::*;
