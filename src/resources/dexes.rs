//! Dexes resource group.

use super::{network_path, PoolsApi, ResourceContext};
use crate::cache::ResourceKind;
use crate::client::DexPaprikaClient;
use crate::domain::{PageParams, PoolListParams};
use crate::error::DexPaprikaResult;
use crate::models::{DexesResponse, PoolsResponse};

/// Decentralized exchanges per network.
#[derive(Clone, Copy)]
pub struct DexesApi<'a> {
    ctx: ResourceContext<'a>,
}

impl<'a> DexesApi<'a> {
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

    /// Dexes on a network.
    pub fn list(&self, network: &str, params: &PageParams) -> DexPaprikaResult<DexesResponse> {
        params.validate()?;
        let path = format!("{}/dexes", network_path(network)?);
        self.ctx
            .fetch(&path, &params.to_query(), ResourceKind::Default)
    }

    /// Pools hosted by one dex.
    pub fn pools(
        &self,
        network: &str,
        dex: &str,
        params: &PoolListParams,
    ) -> DexPaprikaResult<PoolsResponse> {
        PoolsApi::from_context(self.ctx).list_by_dex(network, dex, params)
    }
}
