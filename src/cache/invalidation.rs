use thiserror::Error;

use crate::catalog::CatalogItemRecord;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Catalog provider failed: {0}")]
    Provider(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("Invalid cache TTL: {0} seconds")]
    InvalidTtl(u64),
    #[error("Catalog cache holds no snapshot")]
    Empty,
}

/// Why a snapshot was (or would be) refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshReason {
    Forced,
    Empty,
    Expired,
    NewCategory,
}

/// The external catalog store.
pub trait CatalogProvider {
    type Error: std::error::Error + Send + Sync + 'static;

    fn fetch(&self) -> Result<Vec<CatalogItemRecord>, Self::Error>;
}
