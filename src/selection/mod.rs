pub mod augment;
pub mod gate;
pub mod merge;
pub mod similarity;
pub mod strategies;

use std::collections::BTreeSet;

use crate::cache::CatalogSnapshot;
use crate::catalog::{CatalogItem, UserProfile};
use crate::classify::{self, GateVerdict};
use crate::config::EngineConfig;
use crate::gender::detect_gender_preference;
use crate::types::{EngineResult, Outcome};
pub use gate::{GateAction, GateDecision};
pub use merge::{merge_by_priority, run_strategies, MergeResult, StrategyBatch};
pub use similarity::similarity;
pub use strategies::{Strategy, StrategyInput, STRATEGIES};

static NO_CATEGORIES: BTreeSet<String> = BTreeSet::new();

/// One engine invocation's inputs. Borrows the catalog snapshot; nothing is
/// copied until the final recommendations are chosen.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationRequest<'a> {
    pub query: &'a str,
    pub answer_text: &'a str,
    pub catalog: &'a [CatalogItem],
    pub known_categories: &'a BTreeSet<String>,
    pub known_sub_categories: &'a BTreeSet<String>,
    pub profile: Option<&'a UserProfile>,
}

impl<'a> RecommendationRequest<'a> {
    pub fn new(query: &'a str, answer_text: &'a str, catalog: &'a [CatalogItem]) -> Self {
        Self {
            query,
            answer_text,
            catalog,
            known_categories: &NO_CATEGORIES,
            known_sub_categories: &NO_CATEGORIES,
            profile: None,
        }
    }

    /// Request over everything a cached snapshot holds.
    pub fn from_snapshot(query: &'a str, answer_text: &'a str, snapshot: &'a CatalogSnapshot) -> Self {
        Self {
            query,
            answer_text,
            catalog: &snapshot.items,
            known_categories: &snapshot.known_categories,
            known_sub_categories: &snapshot.known_sub_categories,
            profile: None,
        }
    }

    pub fn with_known_categories(
        mut self,
        categories: &'a BTreeSet<String>,
        sub_categories: &'a BTreeSet<String>,
    ) -> Self {
        self.known_categories = categories;
        self.known_sub_categories = sub_categories;
        self
    }

    pub fn with_profile(mut self, profile: Option<&'a UserProfile>) -> Self {
        self.profile = profile;
        self
    }
}

/// The decision engine. Stateless apart from its configuration, so one
/// instance can serve concurrent callers over a shared snapshot.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
}

impl RecommendationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Decide whether and what to recommend for one exchange.
    pub fn decide(&self, request: &RecommendationRequest<'_>) -> EngineResult {
        let verdict = classify::classify(request.query, request.answer_text);
        tracing::debug!(?verdict, "query classified");

        let outcome = match verdict {
            GateVerdict::NegativeAvailability => Some(Outcome::NegativeAvailability),
            GateVerdict::GeneralInfo => Some(Outcome::GeneralInfo),
            GateVerdict::NotProductRequest => Some(Outcome::NotProductRequest),
            GateVerdict::Proceed => None,
        };
        if let Some(outcome) = outcome {
            return EngineResult::unchanged(request.answer_text, outcome);
        }

        let merged = self.rank(request);
        let GateDecision {
            kept,
            relevance_score,
            action,
        } = gate::apply(request.query, request.answer_text, merged.selected, &self.config);

        match action {
            GateAction::Apologize => EngineResult {
                augmented_text: augment::with_apology(request.answer_text, &self.config),
                recommendations: Vec::new(),
                relevance_score: 0.0,
                outcome: Outcome::NoMatches,
            },
            GateAction::Passthrough => {
                EngineResult::unchanged(request.answer_text, Outcome::BelowThreshold)
            }
            GateAction::Attach => {
                let recommendations: Vec<CatalogItem> =
                    kept.iter().map(|candidate| candidate.item.clone()).collect();
                match augment::with_payload(request.answer_text, &recommendations, &self.config) {
                    Ok(augmented_text) => EngineResult {
                        augmented_text,
                        recommendations,
                        relevance_score,
                        outcome: Outcome::Recommended,
                    },
                    Err(err) => {
                        tracing::error!(error = %err, "failed to serialize recommendation payload");
                        EngineResult::unchanged(request.answer_text, Outcome::BelowThreshold)
                    }
                }
            }
        }
    }

    /// Run all strategies and merge them by priority, without gating.
    ///
    /// Each pick keeps the name of the strategy that produced it.
    pub fn rank<'a>(&self, request: &RecommendationRequest<'a>) -> MergeResult<'a> {
        let gender = detect_gender_preference(request.query, request.answer_text);
        tracing::debug!(?gender, catalog_size = request.catalog.len(), "ranking catalog");

        let input = StrategyInput {
            query: request.query,
            answer_text: request.answer_text,
            catalog: request.catalog,
            known_categories: request.known_categories,
            known_sub_categories: request.known_sub_categories,
            profile: request.profile,
            gender,
            mention_threshold: self.config.explicit_mention_min_similarity,
            new_products_limit: self.config.new_products_limit,
        };

        let batches = run_strategies(&input, &STRATEGIES);
        merge_by_priority(batches, self.config.recommendation_limit())
    }
}
