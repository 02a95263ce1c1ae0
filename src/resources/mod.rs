//! Resource groups: thin, typed method surfaces over the client.
//!
//! Each group borrows the client, validates its inputs, builds the request
//! path and query, and reads through the cache with the TTL of its resource
//! kind. Calling `.skip_cache()` on a group forces fresh fetches for the
//! calls made through that handle.

pub mod dexes;
pub mod networks;
pub mod pools;
pub mod search;
pub mod tokens;
pub mod utils;

pub use dexes::DexesApi;
pub use networks::NetworksApi;
pub use pools::PoolsApi;
pub use search::SearchApi;
pub use tokens::TokensApi;
pub use utils::UtilsApi;

use crate::cache::ResourceKind;
use crate::client::DexPaprikaClient;
use crate::domain::Identifier;
use crate::error::DexPaprikaResult;
use serde::de::DeserializeOwned;

/// What every resource group carries: the client and the bypass flag.
#[derive(Clone, Copy)]
pub(crate) struct ResourceContext<'a> {
    client: &'a DexPaprikaClient,
    skip_cache: bool,
}

impl<'a> ResourceContext<'a> {
    pub(crate) fn new(client: &'a DexPaprikaClient) -> Self {
        Self {
            client,
            skip_cache: false,
        }
    }

    pub(crate) fn bypassing_cache(self) -> Self {
        Self {
            skip_cache: true,
            ..self
        }
    }

    pub(crate) fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        kind: ResourceKind,
    ) -> DexPaprikaResult<T> {
        self.client.get_cached(path, query, kind, self.skip_cache)
    }
}

/// `/networks/{network}` with the network id validated and encoded.
pub(crate) fn network_path(network: &str) -> DexPaprikaResult<String> {
    let network = Identifier::new("network", network)?;
    Ok(format!("/networks/{}", network.path_segment()))
}
