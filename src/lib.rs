//! Deterministic product-recommendation decision engine for chat answers.
//!
//! `catalog-reco` takes a shopper's message, the answer already generated for
//! it and a catalog snapshot, and decides whether to surface products, which
//! ones (at most three) and with what confidence. It runs query gates, seven
//! matching strategies, priority merging and a relevance gate. All operations
//! are deterministic: identical inputs always produce identical outputs.

use std::collections::BTreeSet;

pub mod cache;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod gender;
pub mod selection;
pub mod taxonomy;
pub mod text;
pub mod types;

pub use catalog::{CatalogItem, CatalogItemRecord, UserProfile};
pub use config::EngineConfig;
pub use selection::{RecommendationEngine, RecommendationRequest};
pub use types::{EngineResult, Outcome};

/// Decide recommendations with the default configuration.
pub fn decide_recommendations(
    query: &str,
    answer_text: &str,
    catalog: &[CatalogItem],
    known_categories: &BTreeSet<String>,
    known_sub_categories: &BTreeSet<String>,
    user_profile: Option<&UserProfile>,
) -> EngineResult {
    let request = RecommendationRequest::new(query, answer_text, catalog)
        .with_known_categories(known_categories, known_sub_categories)
        .with_profile(user_profile);
    RecommendationEngine::default().decide(&request)
}
