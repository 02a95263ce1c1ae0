//! Search resource group.

use super::ResourceContext;
use crate::cache::ResourceKind;
use crate::client::DexPaprikaClient;
use crate::domain::ValidationError;
use crate::error::DexPaprikaResult;
use crate::models::SearchResults;

/// Free-text search over tokens, pools and dexes.
#[derive(Clone, Copy)]
pub struct SearchApi<'a> {
    ctx: ResourceContext<'a>,
}

impl<'a> SearchApi<'a> {
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

    /// Search everything matching `query`.
    pub fn search(&self, query: &str) -> DexPaprikaResult<SearchResults> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ValidationError::Blank { param: "query" }.into());
        }
        self.ctx.fetch(
            "/search",
            &[("query", query.to_string())],
            ResourceKind::Default,
        )
    }
}
