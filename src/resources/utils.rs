//! Utility endpoints.

use super::ResourceContext;
use crate::cache::ResourceKind;
use crate::client::DexPaprikaClient;
use crate::error::DexPaprikaResult;
use crate::models::Stats;

#[derive(Clone, Copy)]
pub struct UtilsApi<'a> {
    ctx: ResourceContext<'a>,
}

impl<'a> UtilsApi<'a> {
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

    /// Ecosystem-wide totals.
    pub fn stats(&self) -> DexPaprikaResult<Stats> {
        self.ctx.fetch("/stats", &[], ResourceKind::Stat)
    }
}
