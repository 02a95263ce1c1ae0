//! DexPaprika - a Rust client for the DexPaprika decentralized-exchange market data API.
//!
//! The client is synchronous and blocking. Reads go through an in-process TTL
//! cache, and transient failures (5xx, timeouts, dropped connections) are
//! retried with scheduled backoff plus jitter.
//!
//! # Architecture
//!
//! - **client**: request executor with retries, the cache-aware client, and an async facade
//! - **cache**: per-entry TTL cache, key construction, TTL policy per resource kind
//! - **resources**: networks, dexes, pools, tokens, search and utils method groups
//! - **domain**: parameter types and validation, rejected before any request
//! - **models**: typed response payloads
//! - **config**: construction-time configuration, optionally from the environment
//! - **error**: error types
//! - **metrics**: request, retry and cache counters
//!
//! # Example
//!
//! ```no_run
//! use dexpaprika::{Config, DexPaprikaClient, PoolListParams, PoolOrderBy};
//!
//! let client = DexPaprikaClient::new(&Config::default());
//! let networks = client.networks().list()?;
//! let pools = client
//!     .pools()
//!     .list_by_network(&networks[0].id, &PoolListParams::new().limit(5).order_by(PoolOrderBy::VolumeUsd))?;
//! // Bypass the cache for one call.
//! let fresh = client.utils().skip_cache().stats()?;
//! # Ok::<(), dexpaprika::DexPaprikaError>(())
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod resources;

// Re-export commonly used types
pub use cache::{ResourceKind, TimedCache, TtlPolicy};
pub use client::{
    AsyncDexPaprikaClient, AsyncDexPaprikaClientImpl, DexPaprikaClient, HttpMethod,
    RequestExecutor, RetryPolicy,
};
pub use config::Config;
pub use domain::{
    OhlcvInterval, OhlcvParams, PageParams, PoolListParams, PoolOrderBy, SortOrder, TimeBound,
    TokenPoolsParams, TransactionParams, ValidationError,
};
pub use error::{ConfigError, DexPaprikaError, DexPaprikaResult};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{
    Dex, DexesResponse, Network, OhlcvRecord, PageInfo, Pool, PoolDetails, PoolsResponse,
    SearchResults, Stats, TokenDetails, Transaction, TransactionsResponse,
};
