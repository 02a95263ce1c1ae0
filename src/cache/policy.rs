//! TTL policy per resource type.

use std::time::Duration;

/// Resource type a cached response belongs to.
///
/// Chosen by the calling method from the endpoint it hits, never inferred
/// from the cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Network,
    Pool,
    Token,
    Stat,
    Default,
}

/// How long each kind of response stays fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtlPolicy {
    pub network: Duration,
    pub pool: Duration,
    pub token: Duration,
    pub stat: Duration,
    pub default: Duration,
}

impl Default for TtlPolicy {
    fn default() -> Self {
        Self {
            network: Duration::from_secs(24 * 60 * 60),
            pool: Duration::from_secs(5 * 60),
            token: Duration::from_secs(10 * 60),
            stat: Duration::from_secs(15 * 60),
            default: Duration::from_secs(5 * 60),
        }
    }
}

impl TtlPolicy {
    /// Look up the TTL for a resource kind.
    pub fn ttl_for(&self, kind: ResourceKind) -> Duration {
        match kind {
            ResourceKind::Network => self.network,
            ResourceKind::Pool => self.pool,
            ResourceKind::Token => self.token,
            ResourceKind::Stat => self.stat,
            ResourceKind::Default => self.default,
        }
    }
}
