// The cache owns the snapshot; callers only ever get shared, read-only views.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::cache::invalidation::{CacheError, CatalogProvider, RefreshReason};
use crate::cache::versioning::{CacheConfig, CatalogSnapshot};

/// Source of the current time. Injected so expiry can be driven by tests.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[derive(Debug)]
pub struct CatalogCache<C = SystemClock> {
    config: CacheConfig,
    clock: C,
    snapshot: Option<Arc<CatalogSnapshot>>,
    invalidated: bool,
}

impl CatalogCache<SystemClock> {
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> CatalogCache<C> {
    pub fn with_clock(config: CacheConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            snapshot: None,
            invalidated: false,
        }
    }

    /// The held snapshot, fresh or not.
    pub fn snapshot(&self) -> Option<Arc<CatalogSnapshot>> {
        self.snapshot.clone()
    }

    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        self.snapshot.as_ref().map(|s| s.refreshed_at)
    }

    /// Why the next fetch would refresh, or `None` if the snapshot is fresh.
    pub fn refresh_reason(&self, force_refresh: bool) -> Result<Option<RefreshReason>, CacheError> {
        if force_refresh {
            return Ok(Some(RefreshReason::Forced));
        }
        let Some(snapshot) = &self.snapshot else {
            return Ok(Some(RefreshReason::Empty));
        };
        if self.invalidated {
            return Ok(Some(RefreshReason::NewCategory));
        }
        let ttl = self
            .config
            .ttl()
            .ok_or(CacheError::InvalidTtl(self.config.ttl_secs))?;
        if self.clock.now() - snapshot.refreshed_at >= ttl {
            return Ok(Some(RefreshReason::Expired));
        }
        Ok(None)
    }

    /// Return a fresh snapshot, refreshing from `provider` when forced, empty,
    /// expired, or invalidated by a newly observed category.
    ///
    /// A failed refresh leaves the previous snapshot in place.
    pub fn fetch<P: CatalogProvider>(
        &mut self,
        provider: &P,
        force_refresh: bool,
    ) -> Result<Arc<CatalogSnapshot>, CacheError> {
        if let Some(reason) = self.refresh_reason(force_refresh)? {
            return self.refresh(provider, reason);
        }
        // refresh_reason returned None, so a snapshot is held
        self.snapshot.clone().ok_or(CacheError::Empty)
    }

    fn refresh<P: CatalogProvider>(
        &mut self,
        provider: &P,
        reason: RefreshReason,
    ) -> Result<Arc<CatalogSnapshot>, CacheError> {
        let records = provider
            .fetch()
            .map_err(|e| CacheError::Provider(Box::new(e)))?;

        let snapshot = CatalogSnapshot::build(records, self.clock.now(), self.snapshot.as_deref());

        tracing::info!(
            ?reason,
            items = snapshot.items.len(),
            version = snapshot.version.as_str(),
            "catalog snapshot refreshed"
        );
        if !snapshot.new_categories.is_empty() {
            tracing::info!(new_categories = ?snapshot.new_categories, "new catalog categories seen");
        }

        let snapshot = Arc::new(snapshot);
        self.snapshot = Some(Arc::clone(&snapshot));
        self.invalidated = false;
        Ok(snapshot)
    }

    /// Record a category/subcategory pair seen outside a refresh (for example
    /// on an item referenced in chat). Unknown values invalidate the cache so
    /// the next fetch refreshes. Returns true if the cache was invalidated.
    pub fn observe_item(&mut self, category: &str, sub_category: &str) -> bool {
        let Some(snapshot) = &self.snapshot else {
            return false;
        };
        if snapshot.is_known(category, sub_category) {
            return false;
        }
        tracing::info!(category, sub_category, "unknown category observed; invalidating catalog cache");
        self.invalidated = true;
        true
    }

    pub fn invalidate(&mut self) {
        self.invalidated = true;
    }
}
