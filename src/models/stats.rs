//! Ecosystem-wide counters.

use super::common::lenient_u64;
use serde::{Deserialize, Serialize};

/// Totals reported by `/stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    #[serde(deserialize_with = "lenient_u64")]
    pub chains: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub factories: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub pools: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub tokens: u64,
}
