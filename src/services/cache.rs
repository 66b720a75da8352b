use crate::config::CatalogSettings;
use crate::models::Catalog;
use crate::services::catalog::{CatalogClient, CatalogError};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

const CATALOG_KEY: &str = "catalog";

/// Errors that can occur with cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Catalog refresh failed: {0}")]
    RefreshFailed(Arc<CatalogError>),
}

/// Caching layer over the catalog endpoint
///
/// Holds the last good catalog for a TTL so quiz traffic does not hammer
/// the endpoint. Concurrent refreshes coalesce into a single fetch.
pub struct CatalogCache {
    catalog_client: Arc<CatalogClient>,
    cache: moka::future::Cache<&'static str, Arc<Catalog>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CatalogCache {
    /// Create a new catalog cache
    pub fn new(catalog_client: CatalogClient, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(1)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            catalog_client: Arc::new(catalog_client),
            cache,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn from_settings(settings: &CatalogSettings) -> Self {
        Self::new(CatalogClient::from_settings(settings), settings.cache_ttl_secs)
    }

    /// Get the catalog, refreshing through the client on a miss
    pub async fn get(&self) -> Result<Arc<Catalog>, CacheError> {
        if let Some(catalog) = self.cache.get(CATALOG_KEY).await {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("Catalog cache hit");
            return Ok(catalog);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::trace!("Catalog cache miss, refreshing");

        let catalog_client = Arc::clone(&self.catalog_client);
        self.cache
            .try_get_with(CATALOG_KEY, async move {
                let catalog = catalog_client.fetch_with_retry().await?;
                Ok::<_, CatalogError>(Arc::new(catalog))
            })
            .await
            .map_err(CacheError::RefreshFailed)
    }

    /// Fetch a fresh catalog and replace the cached one
    pub async fn prime(&self) -> Result<Arc<Catalog>, CatalogError> {
        let catalog = Arc::new(self.catalog_client.fetch_with_retry().await?);
        self.cache.insert(CATALOG_KEY, Arc::clone(&catalog)).await;
        Ok(catalog)
    }

    /// Seed the cache with an already-loaded catalog
    pub async fn store(&self, catalog: Catalog) -> Arc<Catalog> {
        let catalog = Arc::new(catalog);
        self.cache.insert(CATALOG_KEY, Arc::clone(&catalog)).await;
        catalog
    }

    /// Get the cached catalog without triggering a refresh
    pub async fn cached(&self) -> Option<Arc<Catalog>> {
        self.cache.get(CATALOG_KEY).await
    }

    /// Drop the cached catalog so the next get refreshes
    pub async fn invalidate(&self) {
        self.cache.invalidate(CATALOG_KEY).await;
        tracing::debug!("Catalog cache invalidated");
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        let hit_count = self.hits.load(Ordering::Relaxed);
        let miss_count = self.misses.load(Ordering::Relaxed);
        let total = hit_count + miss_count;
        let hit_rate = if total > 0 {
            hit_count as f64 / total as f64
        } else {
            0.0
        };

        CacheStats {
            entries: self.cache.entry_count(),
            hit_count,
            miss_count,
            hit_rate,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
    pub hit_count: u64,
    pub miss_count: u64,
    pub hit_rate: f64,
}
