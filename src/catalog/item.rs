use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::ItemId;

/// Raw catalog record as handed over by the catalog provider.
///
/// Optional collections default to empty; a record with no `colors` or
/// `sizes` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemRecord {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sub_category: String,
    #[serde(default)]
    pub sizes: BTreeSet<String>,
    #[serde(default)]
    pub colors: BTreeSet<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tag: String,
    pub created_at: DateTime<Utc>,
}

/// A sellable product, with its derived lookup fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    pub normalized_name: String,
    pub price: f64,
    pub category: String,
    pub sub_category: String,
    pub sizes: BTreeSet<String>,
    pub colors: BTreeSet<String>,
    pub description: String,
    pub tag: String,
    pub keywords: String,
    pub created_at: DateTime<Utc>,
}

impl CatalogItem {
    /// Ingest a raw record into a catalog item.
    ///
    /// This is the only way to construct an item; the derived `normalized_name`
    /// and `keywords` fields are always consistent with the record.
    pub fn ingest(record: CatalogItemRecord) -> Self {
        let normalized_name = record.name.trim().to_lowercase();

        let mut parts: Vec<&str> = vec![
            &record.name,
            &record.category,
            &record.sub_category,
            &record.description,
            &record.tag,
        ];
        parts.extend(record.colors.iter().map(String::as_str));
        parts.extend(record.sizes.iter().map(String::as_str));
        let keywords = parts
            .into_iter()
            .filter(|p| !p.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        CatalogItem {
            id: record.id,
            name: record.name,
            normalized_name,
            price: record.price,
            category: record.category,
            sub_category: record.sub_category,
            sizes: record.sizes,
            colors: record.colors,
            description: record.description,
            tag: record.tag,
            keywords,
            created_at: record.created_at,
        }
    }

    /// Lowercased category, subcategory, keywords and name, in that order.
    pub(crate) fn searchable_fields(&self) -> [String; 4] {
        [
            self.category.to_lowercase(),
            self.sub_category.to_lowercase(),
            self.keywords.clone(),
            self.normalized_name.clone(),
        ]
    }

    /// Lowercased category, subcategory and name; the fields that describe
    /// what the garment is rather than how it is marketed.
    pub(crate) fn type_fields(&self) -> [String; 3] {
        [
            self.category.to_lowercase(),
            self.sub_category.to_lowercase(),
            self.normalized_name.clone(),
        ]
    }
}

impl From<CatalogItemRecord> for CatalogItem {
    fn from(record: CatalogItemRecord) -> Self {
        CatalogItem::ingest(record)
    }
}
