//! Generators shared by the property tests.

use proptest::prelude::*;
use sift::Document;

const CATEGORIES: &[&str] = &["Policies", "Products", "Training", "Operations"];

/// Word-like strings drawn from a small alphabet so queries collide with text.
pub fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{1,6}").unwrap()
}

pub fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..8).prop_map(|words| words.join(" "))
}

pub fn query() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..3).prop_map(|words| words.join(" "))
}

pub fn category() -> impl Strategy<Value = String> {
    prop::sample::select(CATEGORIES).prop_map(str::to_string)
}

/// Corpora with unique ids `d0..dn`.
pub fn corpus() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(
        (text(), text(), category(), prop::collection::vec(word(), 0..4)),
        0..8,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, content, category, tags))| {
                Document::new(format!("d{}", i), title, content, category, tags)
            })
            .collect()
    })
}
