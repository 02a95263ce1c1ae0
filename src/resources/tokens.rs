//! Tokens resource group.

use super::{network_path, ResourceContext};
use crate::cache::ResourceKind;
use crate::client::DexPaprikaClient;
use crate::domain::{Identifier, TokenPoolsParams};
use crate::error::DexPaprikaResult;
use crate::models::{PoolsResponse, TokenDetails};

/// Tokens on a network.
#[derive(Clone, Copy)]
pub struct TokensApi<'a> {
    ctx: ResourceContext<'a>,
}

impl<'a> TokensApi<'a> {
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

    /// Metadata and market summary for a token.
    pub fn details(&self, network: &str, token_address: &str) -> DexPaprikaResult<TokenDetails> {
        let path = self.token_path(network, token_address)?;
        self.ctx.fetch(&path, &[], ResourceKind::Token)
    }

    /// Pools that trade a token.
    pub fn pools(
        &self,
        network: &str,
        token_address: &str,
        params: &TokenPoolsParams,
    ) -> DexPaprikaResult<PoolsResponse> {
        params.validate()?;
        let path = format!("{}/pools", self.token_path(network, token_address)?);
        self.ctx.fetch(&path, &params.to_query(), ResourceKind::Pool)
    }

    fn token_path(&self, network: &str, token_address: &str) -> DexPaprikaResult<String> {
        let address = Identifier::new("token_address", token_address)?;
        Ok(format!(
            "{}/tokens/{}",
            network_path(network)?,
            address.path_segment()
        ))
    }
}
