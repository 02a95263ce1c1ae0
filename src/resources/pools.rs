//! Pools resource group.

use super::{network_path, ResourceContext};
use crate::cache::ResourceKind;
use crate::client::DexPaprikaClient;
use crate::domain::{Identifier, OhlcvParams, PoolListParams, TransactionParams};
use crate::error::DexPaprikaResult;
use crate::models::{OhlcvRecord, PoolDetails, PoolsResponse, TransactionsResponse};

/// Liquidity pools.
#[derive(Clone, Copy)]
pub struct PoolsApi<'a> {
    ctx: ResourceContext<'a>,
}

impl<'a> PoolsApi<'a> {
    pub(crate) fn new(client: &'a DexPaprikaClient) -> Self {
        Self {
            ctx: ResourceContext::new(client),
        }
    }

    pub(super) fn from_context(ctx: ResourceContext<'a>) -> Self {
        Self { ctx }
    }

    /// Fetch fresh data for calls made through this handle.
    pub fn skip_cache(self) -> Self {
        Self {
            ctx: self.ctx.bypassing_cache(),
        }
    }

    /// Top pools across all networks.
    pub fn list(&self, params: &PoolListParams) -> DexPaprikaResult<PoolsResponse> {
        params.validate()?;
        self.ctx
            .fetch("/pools", &params.to_query(), ResourceKind::Pool)
    }

    /// Top pools on one network.
    pub fn list_by_network(
        &self,
        network: &str,
        params: &PoolListParams,
    ) -> DexPaprikaResult<PoolsResponse> {
        params.validate()?;
        let path = format!("{}/pools", network_path(network)?);
        self.ctx.fetch(&path, &params.to_query(), ResourceKind::Pool)
    }

    /// Pools hosted by one dex on one network.
    pub fn list_by_dex(
        &self,
        network: &str,
        dex: &str,
        params: &PoolListParams,
    ) -> DexPaprikaResult<PoolsResponse> {
        params.validate()?;
        let dex = Identifier::new("dex", dex)?;
        let path = format!(
            "{}/dexes/{}/pools",
            network_path(network)?,
            dex.path_segment()
        );
        self.ctx.fetch(&path, &params.to_query(), ResourceKind::Pool)
    }

    /// Detailed view of one pool. `inversed` flips the quoted price.
    pub fn details(
        &self,
        network: &str,
        pool_address: &str,
        inversed: bool,
    ) -> DexPaprikaResult<PoolDetails> {
        let path = self.pool_path(network, pool_address)?;
        let query = if inversed {
            vec![("inversed", "true".to_string())]
        } else {
            Vec::new()
        };
        self.ctx.fetch(&path, &query, ResourceKind::Pool)
    }

    /// OHLCV candles for a pool.
    pub fn ohlcv(
        &self,
        network: &str,
        pool_address: &str,
        params: &OhlcvParams,
    ) -> DexPaprikaResult<Vec<OhlcvRecord>> {
        params.validate()?;
        let path = format!("{}/ohlcv", self.pool_path(network, pool_address)?);
        self.ctx.fetch(&path, &params.to_query(), ResourceKind::Pool)
    }

    /// Recent transactions in a pool.
    pub fn transactions(
        &self,
        network: &str,
        pool_address: &str,
        params: &TransactionParams,
    ) -> DexPaprikaResult<TransactionsResponse> {
        params.validate()?;
        let path = format!("{}/transactions", self.pool_path(network, pool_address)?);
        self.ctx.fetch(&path, &params.to_query(), ResourceKind::Pool)
    }

    fn pool_path(&self, network: &str, pool_address: &str) -> DexPaprikaResult<String> {
        let address = Identifier::new("pool_address", pool_address)?;
        Ok(format!(
            "{}/pools/{}",
            network_path(network)?,
            address.path_segment()
        ))
    }
}
