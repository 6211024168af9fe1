use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;

/// Internal: an item proposed by one strategy, before merging.
/// Holds a reference into the catalog snapshot to avoid cloning items that
/// are never selected.
#[derive(Debug, Clone)]
pub struct CandidateMatch<'a> {
    pub item: &'a CatalogItem,
    /// Always within `[0.0, 1.0]`.
    pub similarity: f64,
    pub strategy_name: &'static str,
}

impl<'a> CandidateMatch<'a> {
    pub fn new(item: &'a CatalogItem, similarity: f64, strategy_name: &'static str) -> Self {
        let similarity = if similarity.is_nan() {
            0.0
        } else {
            similarity.clamp(0.0, 1.0)
        };
        Self {
            item,
            similarity,
            strategy_name,
        }
    }
}

/// Which branch of the decision produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    NegativeAvailability,
    GeneralInfo,
    NotProductRequest,
    /// A product request with nothing to show; apology appended.
    NoMatches,
    Recommended,
    /// Matches existed but did not clear the relevance gate.
    BelowThreshold,
}

/// The final result of one engine invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineResult {
    pub augmented_text: String,
    /// At most three items, pairwise distinct ids.
    pub recommendations: Vec<CatalogItem>,
    /// Mean similarity of the recommended matches; 0.0 when there are none.
    pub relevance_score: f64,
    pub outcome: Outcome,
}

impl EngineResult {
    pub fn unchanged(answer_text: &str, outcome: Outcome) -> Self {
        Self {
            augmented_text: answer_text.to_string(),
            recommendations: Vec::new(),
            relevance_score: 0.0,
            outcome,
        }
    }
}

/// Machine-readable item summary appended after the payload delimiter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationPayload {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub sub_category: String,
    pub colors: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
}

impl From<&CatalogItem> for RecommendationPayload {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id.as_str().to_string(),
            name: item.name.clone(),
            price: item.price,
            category: item.category.clone(),
            sub_category: item.sub_category.clone(),
            colors: item.colors.clone(),
            sizes: item.sizes.clone(),
        }
    }
}
