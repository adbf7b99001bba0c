//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Document;

/// Create a simple test document with default fields.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(id: &str, title: &str) -> Document {
    Document::new(
        id,
        title,
        format!("Content for {}", title),
        "General",
        ["general"],
    )
}

/// Create a test document with category.
pub fn make_doc_with_category(id: &str, title: &str, category: &str) -> Document {
    Document {
        category: category.to_string(),
        ..make_doc(id, title)
    }
}

/// Create a test document that only differs by its tags.
pub fn make_doc_with_tags(id: &str, tags: &[&str]) -> Document {
    Document {
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..make_doc(id, &format!("Doc {}", id))
    }
}

/// The two-document corpus used throughout the docs and tests.
pub fn scenario_corpus() -> Vec<Document> {
    vec![
        Document::new(
            "1",
            "Return Policy Guidelines",
            "30-day return policy",
            "Policies",
            ["returns", "policy"],
        ),
        Document::new(
            "2",
            "Current Promotions",
            "20% off apparel",
            "Products",
            ["promotions", "sales"],
        ),
    ]
}

/// A small retail knowledge base. Same content as `demos/knowledge_base.json`.
pub fn knowledge_base() -> Vec<Document> {
    vec![
        Document::new(
            "kb-returns",
            "Return Policy Guidelines",
            "Customers may return most items within 30 days with a receipt. Opened electronics carry a 15% restocking fee.",
            "Policies",
            ["returns", "policy", "receipts"],
        ),
        Document::new(
            "kb-warranty",
            "Warranty Claims Process",
            "Verify the purchase date, inspect the product for damage and file the claim through the service portal.",
            "Policies",
            ["warranty", "claims", "service"],
        ),
        Document::new(
            "kb-price-match",
            "Price Matching",
            "We match advertised prices from local competitors on identical items in stock.",
            "Policies",
            ["pricing", "policy", "competitors"],
        ),
        Document::new(
            "kb-promotions",
            "Current Promotions",
            "20% off apparel and free shipping on orders over $50 this week.",
            "Products",
            ["promotions", "sales", "apparel"],
        ),
        Document::new(
            "kb-electronics",
            "Sales Techniques for Electronics",
            "Lead with the customer's use case, demo the product, then bundle accessories and protection plans.",
            "Training",
            ["sales", "electronics", "upselling"],
        ),
        Document::new(
            "kb-objections",
            "Customer Objection Handling",
            "Acknowledge the concern, ask a clarifying question and respond with value before discussing price.",
            "Training",
            ["sales", "objections", "customer service"],
        ),
        Document::new(
            "kb-loyalty",
            "Loyalty Program Overview",
            "Members earn points on every purchase and get early access to seasonal promotions.",
            "Products",
            ["loyalty", "promotions", "rewards"],
        ),
        Document::new(
            "kb-stock",
            "Stock Replenishment Basics",
            "Reorder fast-moving items when shelf stock falls below the safety threshold.",
            "Operations",
            ["inventory", "stock", "operations"],
        ),
    ]
}
