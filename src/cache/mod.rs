pub mod cache;
pub mod invalidation;
pub mod versioning;

pub use cache::{CatalogCache, Clock, SystemClock};
pub use invalidation::{CacheError, CatalogProvider, RefreshReason};
pub use versioning::{CacheConfig, CatalogSnapshot};
