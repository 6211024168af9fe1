use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};

use crate::catalog::{CatalogItem, CatalogItemRecord};
use crate::types::identifiers::SnapshotVersion;

pub const DEFAULT_TTL_SECS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Seconds a snapshot stays fresh.
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_TTL_SECS,
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Option<Duration> {
        i64::try_from(self.ttl_secs).ok().and_then(Duration::try_seconds)
    }
}

/// An immutable view of the catalog, shared between concurrent invocations.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CatalogSnapshot {
    pub items: Vec<CatalogItem>,
    pub known_categories: BTreeSet<String>,
    pub known_sub_categories: BTreeSet<String>,
    pub refreshed_at: DateTime<Utc>,
    pub version: SnapshotVersion,
    /// Category and subcategory values absent from the previous snapshot.
    pub new_categories: Vec<String>,
}

impl CatalogSnapshot {
    /// Ingest provider records into a snapshot. `previous` is used only to
    /// report newly seen category values.
    pub fn build(
        records: Vec<CatalogItemRecord>,
        refreshed_at: DateTime<Utc>,
        previous: Option<&CatalogSnapshot>,
    ) -> Self {
        let items: Vec<CatalogItem> = records.into_iter().map(CatalogItem::ingest).collect();

        let known_categories = collect_values(items.iter().map(|item| item.category.as_str()));
        let known_sub_categories =
            collect_values(items.iter().map(|item| item.sub_category.as_str()));

        let new_categories = match previous {
            Some(prev) => known_categories
                .difference(&prev.known_categories)
                .chain(known_sub_categories.difference(&prev.known_sub_categories))
                .cloned()
                .collect(),
            None => Vec::new(),
        };

        let version = snapshot_version(&items);

        Self {
            items,
            known_categories,
            known_sub_categories,
            refreshed_at,
            version,
            new_categories,
        }
    }

    pub fn is_known(&self, category: &str, sub_category: &str) -> bool {
        let category = category.trim().to_lowercase();
        let sub_category = sub_category.trim().to_lowercase();
        (category.is_empty() || self.known_categories.contains(&category))
            && (sub_category.is_empty() || self.known_sub_categories.contains(&sub_category))
    }
}

fn collect_values<'a>(values: impl Iterator<Item = &'a str>) -> BTreeSet<String> {
    values
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}

/// "sorted(id + ":" + name + ":" + category + ":" + sub_category)"
fn snapshot_version(items: &[CatalogItem]) -> SnapshotVersion {
    let mut lines: Vec<String> = items
        .iter()
        .map(|item| {
            format!(
                "{}:{}:{}:{}",
                item.id.as_str(),
                item.name,
                item.category,
                item.sub_category
            )
        })
        .collect();
    lines.sort();
    SnapshotVersion::from_lines(lines.iter().map(String::as_str))
}
