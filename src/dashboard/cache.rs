use crate::common::lru::LruCache;
use crate::dashboard::{Catalog, CatalogBuilder};
use crate::error::CatalogBuildError;
use crate::site::{CacheKey, SiteContext};
use std::sync::{Arc, Mutex, MutexGuard};

pub const DEFAULT_CAPACITY: usize = 32;

/// Memoizes built catalogs per site context.
///
/// Cached catalogs are never handed out directly: every caller receives its
/// own copy, so removals made while serving one request do not leak into the
/// next one.
///
/// Entries live until evicted, invalidated or cleared. Callers that change
/// a site's configuration (adding a goal, toggling e-commerce) must call
/// [`CatalogCache::invalidate_site`] or resolve a new [`SiteContext`], whose
/// key differs from the stale one.
///
/// Builds run outside the lock. Two threads missing the same key may both
/// build; the last insert wins, which is harmless since builds are pure.
pub struct CatalogCache {
    entries: Mutex<LruCache<CacheKey, Arc<Catalog>>>,
}

impl CatalogCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Return a copy of the cached catalog for `site`, building it on a miss.
    /// Failed builds are not cached.
    pub fn get_or_build(
        &self,
        builder: &CatalogBuilder,
        site: &SiteContext,
    ) -> Result<Catalog, CatalogBuildError> {
        let key = site.cache_key();
        if let Some(hit) = self.lookup(&key) {
            tracing::trace!(site_id = site.site_id(), "catalog cache hit");
            return Ok(Catalog::clone(&hit));
        }
        tracing::debug!(site_id = site.site_id(), "catalog cache miss");
        let catalog = Arc::new(builder.build(site)?);
        self.entries().put(key, Arc::clone(&catalog));
        Ok(Catalog::clone(&catalog))
    }

    pub fn get(&self, site: &SiteContext) -> Option<Catalog> {
        self.lookup(&site.cache_key())
            .map(|hit| Catalog::clone(&hit))
    }

    fn lookup(&self, key: &CacheKey) -> Option<Arc<Catalog>> {
        self.entries().get(key)
    }

    // Entries are only replaced or dropped whole, so a panic while the lock
    // was held cannot leave a half-written catalog behind.
    fn entries(&self) -> MutexGuard<'_, LruCache<CacheKey, Arc<Catalog>>> {
        self.entries.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("catalog cache lock poisoned; reusing its entries");
            poisoned.into_inner()
        })
    }

    pub fn invalidate(&self, site: &SiteContext) -> bool {
        self.entries().remove(&site.cache_key()).is_some()
    }

    /// Drop every cached catalog of `site_id`, whatever its feature flags.
    pub fn invalidate_site(&self, site_id: u32) -> usize {
        let removed = self
            .entries()
            .retain(|key| key.site_id() != site_id);
        tracing::debug!(site_id, removed, "invalidated cached catalogs");
        removed
    }

    pub fn clear(&self) {
        self.entries().clear();
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn poisoned_lock_keeps_serving() {
        let cache = CatalogCache::default();
        let builder = CatalogBuilder::with_defaults();
        let site = SiteContext::new(1);
        cache.get_or_build(&builder, &site).unwrap();

        let _ = catch_unwind(AssertUnwindSafe(|| {
            let _guard = cache.entries.lock().unwrap();
            panic!("consumer panicked while holding the cache");
        }));
        assert!(cache.entries.is_poisoned());

        assert_eq!(cache.len(), 1);
        assert!(cache.get(&site).is_some());
        cache.get_or_build(&builder, &SiteContext::new(2)).unwrap();
        assert_eq!(cache.len(), 2);
        assert!(cache.invalidate(&site));
        assert_eq!(cache.invalidate_site(2), 1);
        assert!(cache.is_empty());
    }
}
