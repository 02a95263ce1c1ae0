//! Liquidity pools, their candles and their swaps.

use super::common::{
    amount_string, lenient_f64, lenient_u32, lenient_u64, IntervalMetrics, PageInfo,
};
use serde::{Deserialize, Serialize};

/// A token as it appears inside a pool listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolToken {
    /// Token contract address
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub chain: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub decimals: u32,
    pub added_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fdv: Option<f64>,
}

/// A pool summary from any of the pool listing endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pool {
    /// Pool contract address
    pub id: String,
    pub dex_id: String,
    pub dex_name: String,
    pub chain: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub volume_usd: f64,
    pub created_at: String,
    #[serde(deserialize_with = "lenient_u64")]
    pub created_at_block_number: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub transactions: u64,
    #[serde(deserialize_with = "lenient_f64")]
    pub price_usd: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub last_price_change_usd_5m: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub last_price_change_usd_1h: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub last_price_change_usd_24h: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,
    pub tokens: Vec<PoolToken>,
}

impl Pool {
    /// "BASE/QUOTE" from the first two token symbols.
    pub fn pair_label(&self) -> String {
        self.tokens
            .iter()
            .take(2)
            .map(|t| t.symbol.as_str())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Page of pools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolsResponse {
    pub pools: Vec<Pool>,
    pub page_info: PageInfo,
}

/// Full view of a single pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolDetails {
    pub id: String,
    #[serde(deserialize_with = "lenient_u64")]
    pub created_at_block_number: u64,
    pub chain: String,
    pub created_at: String,
    pub factory_id: String,
    pub dex_id: String,
    pub dex_name: String,
    pub tokens: Vec<PoolToken>,
    #[serde(deserialize_with = "lenient_f64")]
    pub last_price: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub last_price_usd: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,
    pub price_time: String,
    #[serde(rename = "24h", skip_serializing_if = "Option::is_none")]
    pub day: Option<IntervalMetrics>,
    #[serde(rename = "6h", skip_serializing_if = "Option::is_none")]
    pub six_hours: Option<IntervalMetrics>,
    #[serde(rename = "1h", skip_serializing_if = "Option::is_none")]
    pub hour: Option<IntervalMetrics>,
    #[serde(rename = "30m", skip_serializing_if = "Option::is_none")]
    pub thirty_minutes: Option<IntervalMetrics>,
    #[serde(rename = "15m", skip_serializing_if = "Option::is_none")]
    pub fifteen_minutes: Option<IntervalMetrics>,
    #[serde(rename = "5m", skip_serializing_if = "Option::is_none")]
    pub five_minutes: Option<IntervalMetrics>,
}

/// One OHLCV candle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OhlcvRecord {
    pub time_open: String,
    pub time_close: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub open: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub high: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub low: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub close: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub volume: f64,
}

/// A swap or liquidity event in a pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    pub id: String,
    #[serde(deserialize_with = "lenient_u64")]
    pub log_index: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub transaction_index: u64,
    pub pool_id: String,
    pub sender: String,
    pub recipient: String,
    pub token_0: String,
    pub token_1: String,
    #[serde(deserialize_with = "amount_string")]
    pub amount_0: String,
    #[serde(deserialize_with = "amount_string")]
    pub amount_1: String,
    #[serde(deserialize_with = "lenient_u64")]
    pub created_at_block_number: u64,
    pub created_at: String,
}

/// Page of pool transactions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    pub page_info: PageInfo,
}
