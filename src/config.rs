// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine tuning knobs.
//!
//! The defaults are the production values: fuzzy threshold 0.3, location
//! distance 100, a 0.6/0.4 fuzzy/TF-IDF blend and five suggestions and
//! topics. A JSON config file only needs the fields it overrides.
//!
//! # Constraints
//!
//! | Field            | Range           | Why                                   |
//! |------------------|-----------------|---------------------------------------|
//! | threshold        | [0, 1]          | compared against normalized distances |
//! | distance         | any u32         | 0 pins matches to the field start     |
//! | fuzzy_weight     | [0, 1]          | blend weights must sum to 1 so        |
//! | tfidf_weight     | [0, 1]          | relevance stays within 0..=100        |

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default maximum normalized distance still counted as a fuzzy match.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Default character span over which a match's start position is penalized.
pub const DEFAULT_DISTANCE: u32 = 100;

/// Default weight of the fuzzy component in the blended score.
pub const DEFAULT_FUZZY_WEIGHT: f64 = 0.6;

/// Default weight of the TF-IDF component in the blended score.
pub const DEFAULT_TFIDF_WEIGHT: f64 = 0.4;

/// Default cap on suggestions and related topics.
pub const DEFAULT_LIST_LIMIT: usize = 5;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchConfig {
    pub threshold: f64,
    pub distance: u32,
    pub fuzzy_weight: f64,
    pub tfidf_weight: f64,
    pub max_suggestions: usize,
    pub max_topics: usize,
    /// Fold accented characters onto their base letters before fuzzy matching.
    pub ignore_diacritics: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            threshold: DEFAULT_THRESHOLD,
            distance: DEFAULT_DISTANCE,
            fuzzy_weight: DEFAULT_FUZZY_WEIGHT,
            tfidf_weight: DEFAULT_TFIDF_WEIGHT,
            max_suggestions: DEFAULT_LIST_LIMIT,
            max_topics: DEFAULT_LIST_LIMIT,
            ignore_diacritics: false,
        }
    }
}

impl SearchConfig {
    /// Read a JSON config file and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SearchConfig = serde_json::from_str(&raw).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_unit("threshold", self.threshold)?;
        check_unit("fuzzyWeight", self.fuzzy_weight)?;
        check_unit("tfidfWeight", self.tfidf_weight)?;

        let sum = self.fuzzy_weight + self.tfidf_weight;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(Error::InvalidConfig {
                field: "fuzzyWeight",
                reason: format!("fuzzyWeight + tfidfWeight must equal 1, got {}", sum),
            });
        }
        Ok(())
    }
}

fn check_unit(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidConfig {
            field,
            reason: format!("must be within [0, 1], got {}", value),
        })
    }
}
