//! HTTP client for the DexPaprika API.
//!
//! `DexPaprikaClient` ties the request executor to the response cache. Every
//! read goes through [`DexPaprikaClient::get_cached`]: a fresh cache entry is
//! returned as-is, otherwise the executor fetches the resource and the decoded
//! result is stored with the TTL of its resource kind.
//!
//! The client is synchronous. Use [`AsyncDexPaprikaClientImpl`] from async code.

mod async_wrapper;
mod executor;
mod retry;

pub use async_wrapper::{AsyncDexPaprikaClient, AsyncDexPaprikaClientImpl};
pub use executor::{HttpMethod, RequestExecutor};
pub use retry::RetryPolicy;

use crate::cache::{cache_key, ResourceKind, TimedCache, TtlPolicy};
use crate::config::Config;
use crate::error::DexPaprikaResult;
use crate::metrics::Metrics;
use crate::resources::{DexesApi, NetworksApi, PoolsApi, SearchApi, TokensApi, UtilsApi};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Client for the DexPaprika API.
///
/// Cloning is cheap and clones share the cache and metrics.
#[derive(Clone, Debug)]
pub struct DexPaprikaClient {
    /// Request executor with retry policy
    executor: RequestExecutor,

    /// GET response cache
    cache: TimedCache<Value>,

    /// Freshness per resource kind
    ttl: TtlPolicy,

    /// When false every call goes to the network
    cache_enabled: bool,

    /// Metrics collector
    metrics: Metrics,
}

impl Default for DexPaprikaClient {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl DexPaprikaClient {
    /// Create a new client from configuration.
    pub fn new(config: &Config) -> Self {
        let metrics = Metrics::new();
        Self {
            executor: RequestExecutor::new(config, metrics.clone()),
            cache: TimedCache::new(),
            ttl: config.ttl,
            cache_enabled: config.cache_enabled,
            metrics,
        }
    }

    /// Create a client with a custom base URL and default settings otherwise
    /// (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(&Config::default().with_api_url(base_url))
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Get a reference to the request executor.
    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    /// Number of entries currently held by the cache (expired ones included).
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Drop cached responses: all of them, or those whose path starts with
    /// `prefix` (e.g. `"/networks"`). Returns how many entries were removed.
    pub fn clear_cache(&self, prefix: Option<&str>) -> usize {
        let removed = self.cache.clear(prefix);
        tracing::debug!(prefix = ?prefix, removed, "Cache cleared");
        removed
    }

    /// Evict expired entries. Returns how many were removed.
    pub fn prune_cache(&self) -> usize {
        let removed = self.cache.cleanup_expired();
        tracing::debug!(removed, "Expired cache entries pruned");
        removed
    }

    // ========================= Resource Groups =========================

    /// Networks and their dexes.
    pub fn networks(&self) -> NetworksApi<'_> {
        NetworksApi::new(self)
    }

    /// Dexes and the pools they host.
    pub fn dexes(&self) -> DexesApi<'_> {
        DexesApi::new(self)
    }

    /// Pools, OHLCV candles and pool transactions.
    pub fn pools(&self) -> PoolsApi<'_> {
        PoolsApi::new(self)
    }

    /// Token details and token pools.
    pub fn tokens(&self) -> TokensApi<'_> {
        TokensApi::new(self)
    }

    /// Free-text search.
    pub fn search(&self) -> SearchApi<'_> {
        SearchApi::new(self)
    }

    /// Ecosystem statistics.
    pub fn utils(&self) -> UtilsApi<'_> {
        UtilsApi::new(self)
    }

    // ========================= Cached Reads =========================

    /// GET `path` through the cache and decode the payload.
    ///
    /// With `skip_cache` the lookup is skipped but the fresh result is still
    /// stored. Errors are never cached, and neither is a payload that fails to
    /// decode.
    pub fn get_cached<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        kind: ResourceKind,
        skip_cache: bool,
    ) -> DexPaprikaResult<T> {
        if !self.cache_enabled {
            let value = self.executor.get(path, query)?;
            return Ok(serde_json::from_value(value)?);
        }

        let key = cache_key(path, query);

        if !skip_cache {
            let cached = self.cache.get(&key);
            self.metrics.record_cache_access(&key, cached.is_some());
            if let Some(value) = cached {
                return Ok(serde_json::from_value(value)?);
            }
        }

        let value = self.executor.get(path, query)?;
        let decoded: T = serde_json::from_value(value.clone())?;
        self.cache.set(key, value, self.ttl.ttl_for(kind));
        Ok(decoded)
    }
}
