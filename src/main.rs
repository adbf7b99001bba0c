// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use serde::Serialize;
use sift::{load_corpus, SearchConfig, SearchEngine};
use std::path::Path;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "sift=debug",
        _ => "sift=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("warning: tracing subscriber already installed");
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = match &cli.config {
        Some(path) => SearchConfig::from_path(path).map_err(|e| e.to_string())?,
        None => SearchConfig::default(),
    };

    match cli.command {
        Commands::Search {
            corpus,
            query,
            category,
            limit,
            explain,
            json,
        } => {
            let engine = build_engine(&corpus, config)?;
            let results = engine.search_with_limit(&query, category.as_deref(), limit);
            if json {
                print_json(&results)
            } else {
                display::print_results(
                    &query,
                    category.as_deref(),
                    &results,
                    explain.then_some(&engine),
                );
                Ok(())
            }
        }
        Commands::Suggest {
            corpus,
            query,
            json,
        } => {
            let engine = build_engine(&corpus, config)?;
            let suggestions = engine.suggestions(&query);
            if json {
                print_json(&suggestions)
            } else {
                display::print_suggestions(&query, &suggestions);
                Ok(())
            }
        }
        Commands::Topics {
            corpus,
            query,
            json,
        } => {
            let engine = build_engine(&corpus, config)?;
            if json {
                print_json(&engine.related_topics(&query))
            } else {
                let limit = engine.config().max_topics;
                let counts: Vec<(String, usize)> =
                    engine.topic_counts().into_iter().take(limit).collect();
                display::print_topics(&counts);
                Ok(())
            }
        }
    }
}

fn build_engine(corpus: &Path, config: SearchConfig) -> Result<SearchEngine, String> {
    let documents = load_corpus(corpus).map_err(|e| e.to_string())?;
    SearchEngine::with_config(documents, config).map_err(|e| e.to_string())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), String> {
    let rendered =
        serde_json::to_string_pretty(value).map_err(|e| format!("Failed to encode JSON: {}", e))?;
    println!("{}", rendered);
    Ok(())
}
