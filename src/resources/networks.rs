//! Networks resource group.

use super::{DexesApi, ResourceContext};
use crate::cache::ResourceKind;
use crate::client::DexPaprikaClient;
use crate::domain::PageParams;
use crate::error::DexPaprikaResult;
use crate::models::{DexesResponse, Network};

/// Supported blockchain networks.
#[derive(Clone, Copy)]
pub struct NetworksApi<'a> {
    ctx: ResourceContext<'a>,
}

impl<'a> NetworksApi<'a> {
    pub(crate) fn new(client: &'a DexPaprikaClient) -> Self {
        Self {
            ctx: ResourceContext::new(client),
        }
    }

    /// Fetch fresh data for calls made through this handle.
    pub fn skip_cache(self) -> Self {
        Self {
            ctx: self.ctx.bypassing_cache(),
        }
    }

    /// All supported networks.
    pub fn list(&self) -> DexPaprikaResult<Vec<Network>> {
        self.ctx.fetch("/networks", &[], ResourceKind::Network)
    }

    /// Dexes available on a network.
    pub fn dexes(&self, network: &str, params: &PageParams) -> DexPaprikaResult<DexesResponse> {
        DexesApi::from_context(self.ctx).list(network, params)
    }
}
