//! Async wrapper around the synchronous DexPaprikaClient.
//!
//! This module provides an async interface to the blocking client by using
//! `tokio::task::spawn_blocking` to run HTTP calls (and their retry sleeps) on
//! tokio's blocking pool, keeping the async runtime free.

use crate::client::DexPaprikaClient;
use crate::domain::{OhlcvParams, PageParams, PoolListParams, TokenPoolsParams, TransactionParams};
use crate::error::{DexPaprikaError, DexPaprikaResult};
use crate::models::*;
use async_trait::async_trait;
use std::sync::Arc;

/// Async version of the resource-group reads.
///
/// Every method runs the matching blocking call on a dedicated thread, so the
/// cache and retry behavior are exactly those of [`DexPaprikaClient`].
#[async_trait]
pub trait AsyncDexPaprikaClient: Send + Sync {
    async fn networks(&self) -> DexPaprikaResult<Vec<Network>>;
    async fn network_dexes(
        &self,
        network: &str,
        params: &PageParams,
    ) -> DexPaprikaResult<DexesResponse>;

    async fn top_pools(&self, params: &PoolListParams) -> DexPaprikaResult<PoolsResponse>;
    async fn network_pools(
        &self,
        network: &str,
        params: &PoolListParams,
    ) -> DexPaprikaResult<PoolsResponse>;
    async fn dex_pools(
        &self,
        network: &str,
        dex: &str,
        params: &PoolListParams,
    ) -> DexPaprikaResult<PoolsResponse>;
    async fn pool_details(
        &self,
        network: &str,
        pool_address: &str,
        inversed: bool,
    ) -> DexPaprikaResult<PoolDetails>;
    async fn pool_ohlcv(
        &self,
        network: &str,
        pool_address: &str,
        params: &OhlcvParams,
    ) -> DexPaprikaResult<Vec<OhlcvRecord>>;
    async fn pool_transactions(
        &self,
        network: &str,
        pool_address: &str,
        params: &TransactionParams,
    ) -> DexPaprikaResult<TransactionsResponse>;

    async fn token_details(
        &self,
        network: &str,
        token_address: &str,
    ) -> DexPaprikaResult<TokenDetails>;
    async fn token_pools(
        &self,
        network: &str,
        token_address: &str,
        params: &TokenPoolsParams,
    ) -> DexPaprikaResult<PoolsResponse>;

    async fn search(&self, query: &str) -> DexPaprikaResult<SearchResults>;
    async fn stats(&self) -> DexPaprikaResult<Stats>;

    /// Drop cached responses (all, or by path prefix).
    fn clear_cache(&self, prefix: Option<&str>) -> usize;
}

/// Async wrapper around the synchronous DexPaprikaClient.
#[derive(Clone)]
pub struct AsyncDexPaprikaClientImpl {
    client: Arc<DexPaprikaClient>,
}

impl AsyncDexPaprikaClientImpl {
    pub fn new(client: DexPaprikaClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// The wrapped blocking client.
    pub fn inner(&self) -> &DexPaprikaClient {
        &self.client
    }

    async fn run_blocking<T, F>(&self, call: F) -> DexPaprikaResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&DexPaprikaClient) -> DexPaprikaResult<T> + Send + 'static,
    {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || call(client.as_ref()))
            .await
            .map_err(|e| DexPaprikaError::TaskFailed(format!("Task join error: {}", e)))?
    }
}

#[async_trait]
impl AsyncDexPaprikaClient for AsyncDexPaprikaClientImpl {
    async fn networks(&self) -> DexPaprikaResult<Vec<Network>> {
        self.run_blocking(|client| client.networks().list()).await
    }

    async fn network_dexes(
        &self,
        network: &str,
        params: &PageParams,
    ) -> DexPaprikaResult<DexesResponse> {
        let network = network.to_string();
        let params = params.clone();

        self.run_blocking(move |client| client.networks().dexes(&network, &params))
            .await
    }

    async fn top_pools(&self, params: &PoolListParams) -> DexPaprikaResult<PoolsResponse> {
        let params = params.clone();

        self.run_blocking(move |client| client.pools().list(&params))
            .await
    }

    async fn network_pools(
        &self,
        network: &str,
        params: &PoolListParams,
    ) -> DexPaprikaResult<PoolsResponse> {
        let network = network.to_string();
        let params = params.clone();

        self.run_blocking(move |client| client.pools().list_by_network(&network, &params))
            .await
    }

    async fn dex_pools(
        &self,
        network: &str,
        dex: &str,
        params: &PoolListParams,
    ) -> DexPaprikaResult<PoolsResponse> {
        let network = network.to_string();
        let dex = dex.to_string();
        let params = params.clone();

        self.run_blocking(move |client| client.pools().list_by_dex(&network, &dex, &params))
            .await
    }

    async fn pool_details(
        &self,
        network: &str,
        pool_address: &str,
        inversed: bool,
    ) -> DexPaprikaResult<PoolDetails> {
        let network = network.to_string();
        let pool_address = pool_address.to_string();

        self.run_blocking(move |client| client.pools().details(&network, &pool_address, inversed))
            .await
    }

    async fn pool_ohlcv(
        &self,
        network: &str,
        pool_address: &str,
        params: &OhlcvParams,
    ) -> DexPaprikaResult<Vec<OhlcvRecord>> {
        let network = network.to_string();
        let pool_address = pool_address.to_string();
        let params = params.clone();

        self.run_blocking(move |client| client.pools().ohlcv(&network, &pool_address, &params))
            .await
    }

    async fn pool_transactions(
        &self,
        network: &str,
        pool_address: &str,
        params: &TransactionParams,
    ) -> DexPaprikaResult<TransactionsResponse> {
        let network = network.to_string();
        let pool_address = pool_address.to_string();
        let params = params.clone();

        self.run_blocking(move |client| {
            client
                .pools()
                .transactions(&network, &pool_address, &params)
        })
        .await
    }

    async fn token_details(
        &self,
        network: &str,
        token_address: &str,
    ) -> DexPaprikaResult<TokenDetails> {
        let network = network.to_string();
        let token_address = token_address.to_string();

        self.run_blocking(move |client| client.tokens().details(&network, &token_address))
            .await
    }

    async fn token_pools(
        &self,
        network: &str,
        token_address: &str,
        params: &TokenPoolsParams,
    ) -> DexPaprikaResult<PoolsResponse> {
        let network = network.to_string();
        let token_address = token_address.to_string();
        let params = params.clone();

        self.run_blocking(move |client| client.tokens().pools(&network, &token_address, &params))
            .await
    }

    async fn search(&self, query: &str) -> DexPaprikaResult<SearchResults> {
        let query = query.to_string();

        self.run_blocking(move |client| client.search().search(&query))
            .await
    }

    async fn stats(&self) -> DexPaprikaResult<Stats> {
        self.run_blocking(|client| client.utils().stats()).await
    }

    fn clear_cache(&self, prefix: Option<&str>) -> usize {
        self.client.clear_cache(prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[tokio::test]
    async fn test_async_client_creation() {
        let config = Config::default().with_api_url("https://api.test.com");
        let client = DexPaprikaClient::new(&config);
        let async_client = AsyncDexPaprikaClientImpl::new(client);

        // Should be able to clone
        let cloned = async_client.clone();
        assert_eq!(cloned.inner().executor().base_url(), "https://api.test.com");
    }

    #[tokio::test]
    async fn test_async_validation_happens_before_request() {
        // Port 9 (discard) would fail; validation must short-circuit first.
        let client = DexPaprikaClient::with_base_url("http://127.0.0.1:9");
        let async_client = AsyncDexPaprikaClientImpl::new(client);

        let err = async_client.search("   ").await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(async_client.inner().metrics().http_requests_total(), 0);
    }
}
