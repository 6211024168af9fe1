use crate::classify::{is_explicit_product_request, is_general_info_or_faq, is_specific_product_query};
use crate::config::EngineConfig;
use crate::gender::{admits, detect_gender_preference};
use crate::selection::merge::relevance_score;
use crate::types::CandidateMatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAction {
    /// Product request with nothing left to show.
    Apologize,
    /// Attach the kept matches as structured recommendations.
    Attach,
    /// Return the answer untouched.
    Passthrough,
}

#[derive(Debug, Clone)]
pub struct GateDecision<'a> {
    pub kept: Vec<CandidateMatch<'a>>,
    pub relevance_score: f64,
    pub action: GateAction,
}

/// Re-apply the gender filter to the merged matches, then decide whether
/// they are relevant enough to show.
///
/// Anything the refilter removes slipped past a strategy's own filter and is
/// logged as such.
pub fn apply<'a>(
    query: &str,
    answer_text: &str,
    merged: Vec<CandidateMatch<'a>>,
    config: &EngineConfig,
) -> GateDecision<'a> {
    let preference = detect_gender_preference(query, answer_text);

    let (kept, leaked): (Vec<_>, Vec<_>) = merged
        .into_iter()
        .partition(|candidate| admits(candidate.item, preference));
    for candidate in &leaked {
        tracing::warn!(
            item_id = %candidate.item.id,
            strategy = candidate.strategy_name,
            ?preference,
            "safety refilter removed an out-of-gender item"
        );
    }

    let relevance_score = relevance_score(&kept);
    let product_query = is_specific_product_query(query) || is_explicit_product_request(query);

    let action = if kept.is_empty() {
        if product_query && !is_general_info_or_faq(query, answer_text) {
            GateAction::Apologize
        } else {
            GateAction::Passthrough
        }
    } else if relevance_score >= config.relevance_threshold && product_query {
        GateAction::Attach
    } else {
        GateAction::Passthrough
    };

    tracing::debug!(
        kept = kept.len(),
        removed = leaked.len(),
        relevance_score,
        ?action,
        "relevance gate decided"
    );

    GateDecision {
        kept,
        relevance_score,
        action,
    }
}
