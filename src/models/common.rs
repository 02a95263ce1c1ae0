//! Shapes shared by several endpoints.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Accept a number, a numeric string, or null (read as 0.0).
///
/// Prices and volumes arrive as numbers on most endpoints but as strings or
/// null on a few.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0.0),
        Value::Number(n) => Ok(n.as_f64().unwrap_or_default()),
        Value::String(s) if s.trim().is_empty() => Ok(0.0),
        Value::String(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
        other => Err(serde::de::Error::custom(format!(
            "expected number, got {}",
            other
        ))),
    }
}

/// Counts and block numbers: a non-negative number, a numeric string, or null
/// (read as 0).
pub(crate) fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0),
        Value::Number(n) => match (n.as_u64(), n.as_f64()) {
            (Some(v), _) => Ok(v),
            (None, Some(f)) if f.is_finite() && f >= 0.0 => Ok(f as u64),
            _ => Err(serde::de::Error::custom(format!(
                "expected a non-negative integer, got {}",
                n
            ))),
        },
        Value::String(s) if s.trim().is_empty() => Ok(0),
        Value::String(s) => s.trim().parse::<u64>().map_err(serde::de::Error::custom),
        other => Err(serde::de::Error::custom(format!(
            "expected integer, got {}",
            other
        ))),
    }
}

pub(crate) fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_u64(deserializer)?;
    u32::try_from(value).map_err(serde::de::Error::custom)
}

/// Keep raw token amounts as text so large integers lose no precision.
pub(crate) fn amount_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected amount, got {}",
            other
        ))),
    }
}

/// Pagination metadata returned alongside list payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    #[serde(deserialize_with = "lenient_u32")]
    pub limit: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub page: u32,
    #[serde(deserialize_with = "lenient_u64")]
    pub total_items: u64,
    #[serde(deserialize_with = "lenient_u32")]
    pub total_pages: u32,
    /// Opaque continuation token (transactions only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_cursor: Option<String>,
}

impl PageInfo {
    /// Whether another page follows this one.
    pub fn has_next_page(&self) -> bool {
        self.next_page_cursor.is_some() || self.page.saturating_add(1) < self.total_pages
    }
}

/// Trading activity over one time window (24h, 6h, 1h, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntervalMetrics {
    #[serde(deserialize_with = "lenient_f64")]
    pub last_price_usd_change: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub volume_usd: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub buy_usd: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub sell_usd: f64,
    #[serde(deserialize_with = "lenient_u64")]
    pub sells: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub buys: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub txns: u64,
}
