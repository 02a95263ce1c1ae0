//! Networks and the exchanges running on them.

use super::common::PageInfo;
use serde::{Deserialize, Serialize};

/// A blockchain network supported by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Network {
    /// Identifier used in paths (e.g. "ethereum")
    pub id: String,

    /// Human-readable name
    pub display_name: String,
}

/// A decentralized exchange on a network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dex {
    /// The API has used both `id` and `dex_id` for this field
    #[serde(alias = "id")]
    pub dex_id: String,

    #[serde(alias = "name")]
    pub dex_name: String,

    pub chain: String,

    /// Protocol family (e.g. "uniswap_v3")
    pub protocol: String,
}

/// Page of dexes for a network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DexesResponse {
    pub dexes: Vec<Dex>,
    pub page_info: PageInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_deserialization() {
        let networks: Vec<Network> = serde_json::from_str(
            r#"[{"id":"ethereum","display_name":"Ethereum"},{"id":"solana","display_name":"Solana","extra":1}]"#,
        )
        .unwrap();
        assert_eq!(networks.len(), 2);
        assert_eq!(networks[1].id, "solana");
    }

    #[test]
    fn test_dex_accepts_both_id_spellings() {
        let a: Dex = serde_json::from_str(r#"{"dex_id":"uniswap_v3","dex_name":"Uniswap V3"}"#)
            .unwrap();
        let b: Dex = serde_json::from_str(r#"{"id":"uniswap_v3","name":"Uniswap V3"}"#).unwrap();
        assert_eq!(a.dex_id, b.dex_id);
        assert_eq!(a.dex_name, b.dex_name);
    }
}
