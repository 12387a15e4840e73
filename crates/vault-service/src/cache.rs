//! Template listing cache.
//!
//! Listings are cached per domain name and invalidated wholesale on every
//! write. Invalidation is deliberately coarse: update and delete only know
//! a template id, so the blast radius matches a full listing revalidation.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use vault_core::config::cache::CacheConfig;
use vault_entity::template::TemplateWithDomain;

/// Cache key for a domain's template listing.
fn listing_key(domain_name: &str) -> String {
    format!("vault:listing:{domain_name}")
}

/// In-memory cache of template listings keyed by domain name.
#[derive(Debug, Clone)]
pub struct ListingCache {
    cache: Cache<String, Arc<Vec<TemplateWithDomain>>>,
}

impl ListingCache {
    /// Create a new listing cache from configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(Duration::from_secs(config.time_to_live_seconds))
            .build();
        Self { cache }
    }

    /// Look up the cached listing for a domain name.
    pub async fn get(&self, domain_name: &str) -> Option<Arc<Vec<TemplateWithDomain>>> {
        self.cache.get(&listing_key(domain_name)).await
    }

    /// Store the listing for a domain name.
    pub async fn insert(&self, domain_name: &str, listing: Arc<Vec<TemplateWithDomain>>) {
        self.cache.insert(listing_key(domain_name), listing).await;
    }

    /// Drop every cached listing. Called after any domain or template
    /// write so readers never observe stale results.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}
