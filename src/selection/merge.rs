use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::selection::strategies::{Strategy, StrategyInput};
use crate::types::{CandidateMatch, ItemId};

/// Output of one strategy run.
#[derive(Debug, Clone)]
pub struct StrategyBatch<'a> {
    pub strategy: Strategy,
    pub matches: Vec<CandidateMatch<'a>>,
}

#[derive(Debug, Clone)]
pub struct MergeResult<'a> {
    pub selected: Vec<CandidateMatch<'a>>,
    pub relevance_score: f64,
    pub candidates_considered: usize,
}

/// Run every strategy. Gating has already happened upstream, so nothing is
/// skipped here.
pub fn run_strategies<'a>(input: &StrategyInput<'a>, strategies: &[Strategy]) -> Vec<StrategyBatch<'a>> {
    strategies
        .iter()
        .map(|strategy| {
            let matches = (strategy.execute)(input);
            tracing::debug!(
                strategy = strategy.name,
                priority = strategy.priority,
                candidates = matches.len(),
                "strategy executed"
            );
            StrategyBatch {
                strategy: *strategy,
                matches,
            }
        })
        .collect()
}

/// Walk batches in ascending priority, each batch by similarity descending,
/// keeping the first `limit` distinct items.
pub fn merge_by_priority<'a>(mut batches: Vec<StrategyBatch<'a>>, limit: usize) -> MergeResult<'a> {
    batches.sort_by_key(|batch| batch.strategy.priority);

    let mut selected: Vec<CandidateMatch<'a>> = Vec::new();
    let mut seen: BTreeSet<&'a ItemId> = BTreeSet::new();
    let mut candidates_considered = 0;

    'batches: for batch in batches {
        let mut matches = batch.matches;
        // Stable: equal scores keep catalog order.
        matches.sort_by(|a, b| b.similarity.partial_cmp(&a.similarity).unwrap_or(Ordering::Equal));

        for candidate in matches {
            if selected.len() >= limit {
                break 'batches;
            }
            candidates_considered += 1;
            if !seen.insert(&candidate.item.id) {
                continue;
            }
            selected.push(candidate);
        }
    }

    debug_assert!(selected.len() <= limit);

    let relevance_score = relevance_score(&selected);
    MergeResult {
        selected,
        relevance_score,
        candidates_considered,
    }
}

/// Mean similarity of `matches`, or 0.0 when there are none.
pub fn relevance_score(matches: &[CandidateMatch<'_>]) -> f64 {
    if matches.is_empty() {
        return 0.0;
    }
    let sum: f64 = matches.iter().map(|m| m.similarity).sum();
    sum / matches.len() as f64
}
