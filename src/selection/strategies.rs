//! The seven candidate generators.
//!
//! Each strategy is a plain record of name, priority and function. Every
//! strategy narrows the catalog to the inferred gender before matching.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::{CatalogItem, UserProfile};
use crate::gender::{filter_products_by_gender, GenderPreference, GenderSignals};
use crate::selection::similarity::similarity;
use crate::taxonomy::{self, Cluster, CATEGORY_CLUSTERS, MEN_WORDS, RESPONSE_CLUSTERS, WOMEN_WORDS};
use crate::text::{contains_any, contains_term};
use crate::types::CandidateMatch;

pub const RESPONSE_CATEGORY_SCORE: f64 = 0.9;
pub const CATEGORY_CLUSTER_SCORE: f64 = 0.8;
pub const GENDER_CATEGORY_SCORE: f64 = 0.75;
pub const KNOWN_CATEGORY_SCORE: f64 = 0.7;
pub const COLOR_SCORE: f64 = 0.7;

const NEW_PRODUCTS_TOP_SCORE: f64 = 0.9;
const NEW_PRODUCTS_STEP: f64 = 0.1;

// Profile weights; the sum of all four is the normaliser.
const PROFILE_CATEGORY_WEIGHT: f64 = 3.0;
const PROFILE_COLOR_WEIGHT: f64 = 2.0;
const PROFILE_SIZE_WEIGHT: f64 = 1.0;
const PROFILE_VIEWED_WEIGHT: f64 = 2.0;
const PROFILE_MAX_SCORE: f64 = 8.0;

// "Classic Hoodie ($49.99)", "**Classic Hoodie** ($49)". Unbolded names are
// the capitalised run right before the price, joined by short lowercase words.
static RE_PRICED_NAME: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?:\*\*([^*\n]{1,80}?)\*\*|\b([A-Z0-9][\w'’&/\-]*(?:\s+(?:(?:and|with|of|in|&)\s+)?[A-Z0-9][\w'’&/\-]*){0,7}))\s*\(\s*\$\s*\d[\d,]*(?:\.\d{1,2})?\s*\)",
    )
    .ok()
});

/// Everything a strategy may look at.
#[derive(Debug, Clone, Copy)]
pub struct StrategyInput<'a> {
    pub query: &'a str,
    pub answer_text: &'a str,
    pub catalog: &'a [CatalogItem],
    pub known_categories: &'a BTreeSet<String>,
    pub known_sub_categories: &'a BTreeSet<String>,
    pub profile: Option<&'a UserProfile>,
    pub gender: GenderPreference,
    /// Minimum similarity for a priced name in the answer to count.
    pub mention_threshold: f64,
    pub new_products_limit: usize,
}

impl<'a> StrategyInput<'a> {
    /// The catalog narrowed to the inferred gender preference.
    pub fn working_set(&self) -> Vec<&'a CatalogItem> {
        filter_products_by_gender(self.catalog, self.gender)
    }
}

pub type StrategyFn = for<'a> fn(&StrategyInput<'a>) -> Vec<CandidateMatch<'a>>;

/// One matching heuristic. Lower priority values are merged first.
#[derive(Clone, Copy)]
pub struct Strategy {
    pub name: &'static str,
    pub priority: u8,
    pub execute: StrategyFn,
}

impl std::fmt::Debug for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Strategy")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .finish()
    }
}

pub const RESPONSE_CATEGORY: &str = "responseCategory";
pub const EXPLICIT_MENTIONS: &str = "explicitMentions";
pub const DIRECT_NAME_MATCH: &str = "directNameMatch";
pub const CATEGORY_MATCH: &str = "categoryMatch";
pub const NEW_PRODUCTS: &str = "newProducts";
pub const COLOR_MATCH: &str = "colorMatch";
pub const USER_PREFERENCE: &str = "userPreference";

pub const STRATEGIES: [Strategy; 7] = [
    Strategy { name: RESPONSE_CATEGORY, priority: 1, execute: response_category },
    Strategy { name: EXPLICIT_MENTIONS, priority: 2, execute: explicit_mentions },
    Strategy { name: DIRECT_NAME_MATCH, priority: 3, execute: direct_name_match },
    Strategy { name: CATEGORY_MATCH, priority: 4, execute: category_match },
    Strategy { name: NEW_PRODUCTS, priority: 5, execute: new_products },
    Strategy { name: COLOR_MATCH, priority: 6, execute: color_match },
    Strategy { name: USER_PREFERENCE, priority: 7, execute: user_preference },
];

/// Garment clusters mentioned in the query or the answer, matched against
/// item fields. An item counts once, for the first cluster it hits.
pub fn response_category<'a>(input: &StrategyInput<'a>) -> Vec<CandidateMatch<'a>> {
    let text = format!("{} {}", input.query, input.answer_text).to_lowercase();
    let mentioned: Vec<&Cluster> = RESPONSE_CLUSTERS
        .iter()
        .filter(|cluster| cluster.is_mentioned_in(&text))
        .collect();
    if mentioned.is_empty() {
        return Vec::new();
    }

    input
        .working_set()
        .into_iter()
        .filter(|item| {
            let fields = item.searchable_fields();
            mentioned
                .iter()
                .any(|cluster| fields.iter().any(|field| cluster.matches_field(field)))
        })
        .map(|item| CandidateMatch::new(item, RESPONSE_CATEGORY_SCORE, RESPONSE_CATEGORY))
        .collect()
}

/// Names quoted with a price in the answer, fuzzy-matched to catalog names.
pub fn explicit_mentions<'a>(input: &StrategyInput<'a>) -> Vec<CandidateMatch<'a>> {
    let Some(regex) = RE_PRICED_NAME.as_ref() else {
        return Vec::new();
    };

    let names: Vec<String> = regex
        .captures_iter(input.answer_text)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect();
    if names.is_empty() {
        return Vec::new();
    }

    let threshold = input.mention_threshold;
    input
        .working_set()
        .into_iter()
        .filter_map(|item| {
            let best = names
                .iter()
                .map(|name| similarity(name, &item.name))
                .fold(0.0_f64, f64::max);
            (best > threshold).then(|| CandidateMatch::new(item, best, EXPLICIT_MENTIONS))
        })
        .collect()
}

/// Item names appearing in the query, or the query appearing in a name.
pub fn direct_name_match<'a>(input: &StrategyInput<'a>) -> Vec<CandidateMatch<'a>> {
    let query = input.query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    input
        .working_set()
        .into_iter()
        .filter(|item| {
            let name = item.normalized_name.as_str();
            !name.is_empty() && (query.contains(name) || name.contains(query.as_str()))
        })
        .map(|item| CandidateMatch::new(item, similarity(&query, &item.name), DIRECT_NAME_MATCH))
        .collect()
}

/// Category vocabulary in the query: fixed clusters, categories seen in the
/// live catalog, and an explicit gender that agrees with the inferred one.
pub fn category_match<'a>(input: &StrategyInput<'a>) -> Vec<CandidateMatch<'a>> {
    let query = input.query.to_lowercase();

    let clusters: Vec<&Cluster> = CATEGORY_CLUSTERS
        .iter()
        .filter(|cluster| cluster.is_mentioned_in(&query))
        .collect();

    let known_terms: Vec<String> = input
        .known_categories
        .iter()
        .chain(input.known_sub_categories.iter())
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty() && contains_term(&query, term))
        .collect();

    let gender_bonus = match input.gender {
        GenderPreference::Women => contains_any(&query, WOMEN_WORDS),
        GenderPreference::Men => contains_any(&query, MEN_WORDS),
        GenderPreference::Neutral => false,
    };

    if clusters.is_empty() && known_terms.is_empty() && !gender_bonus {
        return Vec::new();
    }

    input
        .working_set()
        .into_iter()
        .filter_map(|item| {
            let mut best: Option<f64> = None;
            let mut offer = |score: f64| best = Some(best.map_or(score, |b: f64| b.max(score)));

            let fields = item.searchable_fields();
            if clusters
                .iter()
                .any(|cluster| fields.iter().any(|field| cluster.matches_field(field)))
            {
                offer(CATEGORY_CLUSTER_SCORE);
            }

            let category = item.category.to_lowercase();
            let sub_category = item.sub_category.to_lowercase();
            if known_terms
                .iter()
                .any(|term| contains_term(&category, term) || contains_term(&sub_category, term))
            {
                offer(KNOWN_CATEGORY_SCORE);
            }

            if gender_bonus {
                let signals = GenderSignals::of(item);
                let agrees = match input.gender {
                    GenderPreference::Women => signals.women_indicator,
                    GenderPreference::Men => signals.men_indicator,
                    GenderPreference::Neutral => false,
                };
                if agrees {
                    offer(GENDER_CATEGORY_SCORE);
                }
            }

            best.map(|score| CandidateMatch::new(item, score, CATEGORY_MATCH))
        })
        .collect()
}

/// The newest items, when the query asks for something new.
pub fn new_products<'a>(input: &StrategyInput<'a>) -> Vec<CandidateMatch<'a>> {
    if !contains_term(&input.query.to_lowercase(), "new") {
        return Vec::new();
    }

    let mut items = input.working_set();
    // Newest first, id ascending on ties.
    items.sort_by(|a, b| match b.created_at.cmp(&a.created_at) {
        Ordering::Equal => a.id.cmp(&b.id),
        other => other,
    });

    items
        .into_iter()
        .take(input.new_products_limit)
        .enumerate()
        .map(|(rank, item)| {
            let score = NEW_PRODUCTS_TOP_SCORE - NEW_PRODUCTS_STEP * rank as f64;
            CandidateMatch::new(item, score, NEW_PRODUCTS)
        })
        .collect()
}

/// Items in a color named by the query or the answer.
pub fn color_match<'a>(input: &StrategyInput<'a>) -> Vec<CandidateMatch<'a>> {
    let text = format!("{} {}", input.query, input.answer_text).to_lowercase();
    let wanted = taxonomy::colors_in(&text);
    if wanted.is_empty() {
        return Vec::new();
    }

    input
        .working_set()
        .into_iter()
        .filter(|item| {
            item.colors.iter().any(|color| {
                taxonomy::colors_in(&color.to_lowercase())
                    .iter()
                    .any(|c| wanted.contains(c))
            })
        })
        .map(|item| CandidateMatch::new(item, COLOR_SCORE, COLOR_MATCH))
        .collect()
}

/// Affinity with the shopper's history. Only runs with a profile.
pub fn user_preference<'a>(input: &StrategyInput<'a>) -> Vec<CandidateMatch<'a>> {
    let Some(profile) = input.profile else {
        return Vec::new();
    };
    if profile.is_empty() {
        return Vec::new();
    }

    let viewed: Vec<String> = profile
        .recently_viewed
        .iter()
        .map(|name| name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect();

    input
        .working_set()
        .into_iter()
        .filter_map(|item| {
            let mut score = 0.0;

            if eq_any(&item.category, &profile.top_categories) {
                score += PROFILE_CATEGORY_WEIGHT;
            }
            if item.colors.iter().any(|c| eq_any(c, &profile.top_colors)) {
                score += PROFILE_COLOR_WEIGHT;
            }
            if item.sizes.iter().any(|s| eq_any(s, &profile.top_sizes)) {
                score += PROFILE_SIZE_WEIGHT;
            }
            let name = item.normalized_name.as_str();
            if !name.is_empty()
                && viewed
                    .iter()
                    .any(|v| name.contains(v.as_str()) || v.contains(name))
            {
                score += PROFILE_VIEWED_WEIGHT;
            }

            (score > 0.0)
                .then(|| CandidateMatch::new(item, score / PROFILE_MAX_SCORE, USER_PREFERENCE))
        })
        .collect()
}

fn eq_any(value: &str, candidates: &[String]) -> bool {
    let value = value.trim();
    !value.is_empty() && candidates.iter().any(|c| c.trim().eq_ignore_ascii_case(value))
}
