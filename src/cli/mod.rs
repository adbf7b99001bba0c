// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sift command-line interface.
//!
//! Three subcommands, one per engine operation: `search` ranks a corpus
//! file against a query, `suggest` completes a partial query, and `topics`
//! lists the corpus's dominant tags. Every command reads the corpus fresh
//! and builds a new engine, since nothing is persisted between runs.

pub mod display;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sift",
    about = "Hybrid fuzzy + TF-IDF knowledge-base search",
    version
)]
pub struct Cli {
    /// JSON config file overriding engine defaults (threshold, distance, weights, limits)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank corpus documents against a query
    Search {
        /// Corpus JSON file (array of documents or {"documents": [...]})
        corpus: PathBuf,

        /// Search query
        query: String,

        /// Only keep documents in this category ("all" disables filtering)
        #[arg(short, long)]
        category: Option<String>,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Show which fields of each result passed the fuzzy gate
        #[arg(long)]
        explain: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Complete the words of a partial query from titles and content
    Suggest {
        /// Corpus JSON file
        corpus: PathBuf,

        /// Partial query
        query: String,

        /// Print suggestions as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the most frequent tags in the corpus
    Topics {
        /// Corpus JSON file
        corpus: PathBuf,

        /// Accepted for symmetry with the other commands; does not affect the ranking
        #[arg(default_value = "")]
        query: String,

        /// Print topics as JSON
        #[arg(long)]
        json: bool,
    },
}
