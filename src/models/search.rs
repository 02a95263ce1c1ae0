//! Cross-entity search results.

use super::common::lenient_f64;
use super::network::Dex;
use serde::{Deserialize, Serialize};

/// A token hit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenMatch {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub chain: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub price_usd: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub liquidity_usd: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub volume_usd: f64,
}

/// A pool hit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolMatch {
    pub id: String,
    pub chain: String,
    pub dex_id: String,
    pub dex_name: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub price_usd: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub volume_usd: f64,
    /// Token addresses in the pool
    pub tokens: Vec<serde_json::Value>,
}

/// Everything `/search` found for a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResults {
    pub tokens: Vec<TokenMatch>,
    pub pools: Vec<PoolMatch>,
    pub dexes: Vec<Dex>,
}

impl SearchResults {
    /// Total number of hits across all kinds.
    pub fn len(&self) -> usize {
        self.tokens.len() + self.pools.len() + self.dexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_results_deserialization() {
        let body = r#"{
            "tokens": [{"id": "0xa0b8", "symbol": "USDC", "chain": "ethereum", "price_usd": 1}],
            "pools": [{"id": "0x88e6", "dex_id": "uniswap_v3", "tokens": ["0xa0b8", "0xc02a"]}],
            "dexes": []
        }"#;
        let results: SearchResults = serde_json::from_str(body).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results.tokens[0].price_usd, 1.0);
        assert_eq!(results.pools[0].tokens.len(), 2);
    }

    #[test]
    fn test_empty_search() {
        let results: SearchResults = serde_json::from_str("{}").unwrap();
        assert!(results.is_empty());
    }
}
