//! Token detail payloads.

use super::common::{lenient_f64, lenient_u32, lenient_u64, IntervalMetrics};
use serde::{Deserialize, Serialize};

/// Market summary embedded in token details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenSummary {
    #[serde(deserialize_with = "lenient_f64")]
    pub price_usd: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub fdv: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub liquidity_usd: f64,
    #[serde(deserialize_with = "lenient_u64")]
    pub pools: u64,
    #[serde(rename = "24h", skip_serializing_if = "Option::is_none")]
    pub day: Option<IntervalMetrics>,
    #[serde(rename = "6h", skip_serializing_if = "Option::is_none")]
    pub six_hours: Option<IntervalMetrics>,
    #[serde(rename = "1h", skip_serializing_if = "Option::is_none")]
    pub hour: Option<IntervalMetrics>,
}

/// Token metadata plus its market summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenDetails {
    /// Token contract address
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub chain: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub decimals: u32,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_supply: f64,
    pub description: String,
    pub website: String,
    pub explorer: String,
    pub added_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<TokenSummary>,
}
