//! Typed response models for the DexPaprika API.
//!
//! Decoding is tolerant: unknown fields are ignored, missing fields default,
//! and numeric fields accept numbers, numeric strings or null.

pub mod common;
pub mod network;
pub mod pool;
pub mod search;
pub mod stats;
pub mod token;

pub use common::{IntervalMetrics, PageInfo};
pub use network::{Dex, DexesResponse, Network};
pub use pool::{
    OhlcvRecord, Pool, PoolDetails, PoolToken, PoolsResponse, Transaction, TransactionsResponse,
};
pub use search::{PoolMatch, SearchResults, TokenMatch};
pub use stats::Stats;
pub use token::{TokenDetails, TokenSummary};
