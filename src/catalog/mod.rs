pub mod item;
pub mod profile;

pub use crate::types::identifiers::ItemId;
pub use item::{CatalogItem, CatalogItemRecord};
pub use profile::UserProfile;
