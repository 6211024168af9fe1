use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Shopper profile assembled by the caller from browsing and purchase history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    /// Names of recently viewed items, most recent first.
    pub recently_viewed: Vec<String>,
    pub top_categories: Vec<String>,
    pub top_colors: Vec<String>,
    pub top_sizes: Vec<String>,
    pub preferred_sizes_by_category: BTreeMap<String, String>,
    pub measurements: BTreeMap<String, f64>,
    pub preferred_fit_types: Vec<String>,
}

impl UserProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.recently_viewed.is_empty()
            && self.top_categories.is_empty()
            && self.top_colors.is_empty()
            && self.top_sizes.is_empty()
    }
}
