//! Gender preference inference and catalog filtering.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;
use crate::taxonomy::{MEN_GARMENTS, MEN_WORDS, WOMEN_GARMENTS, WOMEN_WORDS};
use crate::text::{contains_any, contains_any_fragment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderPreference {
    Men,
    Women,
    Neutral,
}

/// Infer the target audience from the query and the generated answer.
///
/// Mixed or absent signals resolve to `Neutral`.
pub fn detect_gender_preference(query: &str, answer_text: &str) -> GenderPreference {
    let combined = format!("{} {}", query, answer_text).to_lowercase();
    let women = contains_any(&combined, WOMEN_WORDS);
    let men = contains_any(&combined, MEN_WORDS);

    match (women, men) {
        (true, false) => GenderPreference::Women,
        (false, true) => GenderPreference::Men,
        _ => GenderPreference::Neutral,
    }
}

/// Gender signals carried by a single item.
///
/// Indicator words are matched whole ("men" never inside "women"); garment
/// types are matched inside compounds ("bralette", "minidress").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenderSignals {
    pub women_indicator: bool,
    pub men_indicator: bool,
    pub women_category: bool,
    pub men_category: bool,
}

impl GenderSignals {
    pub fn of(item: &CatalogItem) -> Self {
        let fields = item.searchable_fields();
        let type_fields = item.type_fields();

        GenderSignals {
            women_indicator: fields.iter().any(|f| contains_any(f, WOMEN_WORDS)),
            men_indicator: fields.iter().any(|f| contains_any(f, MEN_WORDS)),
            women_category: type_fields
                .iter()
                .any(|f| contains_any_fragment(f, WOMEN_GARMENTS)),
            men_category: type_fields.iter().any(|f| contains_any_fragment(f, MEN_GARMENTS)),
        }
    }

    pub fn is_unisex(&self) -> bool {
        !(self.women_indicator || self.men_indicator || self.women_category || self.men_category)
    }
}

/// Whether `item` is acceptable for `preference`.
///
/// Women filtering is strict: the item must read as womenswear and carry no
/// men indicator. Men filtering excludes anything reading as womenswear first,
/// then admits menswear and unisex items.
pub fn admits(item: &CatalogItem, preference: GenderPreference) -> bool {
    let signals = GenderSignals::of(item);
    match preference {
        GenderPreference::Neutral => true,
        GenderPreference::Women => {
            (signals.women_indicator || signals.women_category) && !signals.men_indicator
        }
        GenderPreference::Men => {
            if signals.women_indicator || signals.women_category {
                return false;
            }
            signals.men_indicator || signals.men_category || signals.is_unisex()
        }
    }
}

/// Filter a catalog slice to the items acceptable for `preference`.
pub fn filter_products_by_gender<'a>(
    items: &'a [CatalogItem],
    preference: GenderPreference,
) -> Vec<&'a CatalogItem> {
    items.iter().filter(|item| admits(item, preference)).collect()
}
