//! Request parameter types for the resource groups.
//!
//! Each params struct is built with chained setters and checked by
//! `validate()` just before the request is issued. `to_query()` renders the
//! set fields as scalar query pairs.

use super::errors::ValidationError;
use super::time_bound::TimeBound;
use std::fmt;
use std::str::FromStr;

/// Query pairs as sent on the wire and fed into the cache key.
pub type Query = Vec<(&'static str, String)>;

/// Upper bound on `limit` for paginated list endpoints.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Upper bound on `limit` for OHLCV requests.
pub const MAX_OHLCV_LIMIT: u32 = 366;

fn check_limit(limit: Option<u32>, max: u32) -> Result<(), ValidationError> {
    match limit {
        Some(value) if value == 0 || value > max => Err(ValidationError::OutOfRange {
            param: "limit",
            value: i64::from(value),
            min: 1,
            max: i64::from(max),
        }),
        _ => Ok(()),
    }
}

fn parse_choice<T: Copy>(
    param: &'static str,
    value: &str,
    table: &[(&'static str, T)],
    valid: &'static [&'static str],
) -> Result<T, ValidationError> {
    let needle = value.trim().to_ascii_lowercase();
    table
        .iter()
        .find(|(name, _)| *name == needle)
        .map(|(_, v)| *v)
        .ok_or_else(|| ValidationError::InvalidChoice {
            param,
            value: value.to_string(),
            valid,
        })
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub const VALID: &'static [&'static str] = &["asc", "desc"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(
            "sort",
            s,
            &[("asc", Self::Asc), ("desc", Self::Desc)],
            Self::VALID,
        )
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field used to order pool listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolOrderBy {
    VolumeUsd,
    PriceUsd,
    Transactions,
    LastPriceChangeUsd24h,
    CreatedAt,
}

impl PoolOrderBy {
    pub const VALID: &'static [&'static str] = &[
        "volume_usd",
        "price_usd",
        "transactions",
        "last_price_change_usd_24h",
        "created_at",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VolumeUsd => "volume_usd",
            Self::PriceUsd => "price_usd",
            Self::Transactions => "transactions",
            Self::LastPriceChangeUsd24h => "last_price_change_usd_24h",
            Self::CreatedAt => "created_at",
        }
    }
}

impl FromStr for PoolOrderBy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(
            "order_by",
            s,
            &[
                ("volume_usd", Self::VolumeUsd),
                ("price_usd", Self::PriceUsd),
                ("transactions", Self::Transactions),
                ("last_price_change_usd_24h", Self::LastPriceChangeUsd24h),
                ("created_at", Self::CreatedAt),
            ],
            Self::VALID,
        )
    }
}

impl fmt::Display for PoolOrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candle width for OHLCV requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OhlcvInterval {
    OneMinute,
    FiveMinutes,
    TenMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    OneHour,
    SixHours,
    TwelveHours,
    #[default]
    OneDay,
}

impl OhlcvInterval {
    pub const VALID: &'static [&'static str] =
        &["1m", "5m", "10m", "15m", "30m", "1h", "6h", "12h", "24h"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMinute => "1m",
            Self::FiveMinutes => "5m",
            Self::TenMinutes => "10m",
            Self::FifteenMinutes => "15m",
            Self::ThirtyMinutes => "30m",
            Self::OneHour => "1h",
            Self::SixHours => "6h",
            Self::TwelveHours => "12h",
            Self::OneDay => "24h",
        }
    }
}

impl FromStr for OhlcvInterval {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(
            "interval",
            s,
            &[
                ("1m", Self::OneMinute),
                ("5m", Self::FiveMinutes),
                ("10m", Self::TenMinutes),
                ("15m", Self::FifteenMinutes),
                ("30m", Self::ThirtyMinutes),
                ("1h", Self::OneHour),
                ("6h", Self::SixHours),
                ("12h", Self::TwelveHours),
                ("24h", Self::OneDay),
            ],
            Self::VALID,
        )
    }
}

impl fmt::Display for OhlcvInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plain pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PageParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_limit(self.limit, MAX_PAGE_LIMIT)
    }

    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        query
    }
}

/// Pagination plus ordering, shared by every pool listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<SortOrder>,
    pub order_by: Option<PoolOrderBy>,
}

impl PoolListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn order_by(mut self, order_by: PoolOrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_limit(self.limit, MAX_PAGE_LIMIT)
    }

    pub fn to_query(&self) -> Query {
        let mut query = PageParams {
            page: self.page,
            limit: self.limit,
        }
        .to_query();
        if let Some(sort) = self.sort {
            query.push(("sort", sort.as_str().to_string()));
        }
        if let Some(order_by) = self.order_by {
            query.push(("order_by", order_by.as_str().to_string()));
        }
        query
    }
}

/// Pools containing a given token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenPoolsParams {
    pub list: PoolListParams,
    /// Put the requested token first in each returned pair
    pub reorder: Option<bool>,
    /// Only pools that also contain this token address
    pub address: Option<String>,
}

impl TokenPoolsParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(mut self, list: PoolListParams) -> Self {
        self.list = list;
        self
    }

    pub fn reorder(mut self, reorder: bool) -> Self {
        self.reorder = Some(reorder);
        self
    }

    pub fn paired_with(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.list.validate()?;
        if let Some(address) = &self.address {
            if address.trim().is_empty() {
                return Err(ValidationError::Blank { param: "address" });
            }
        }
        Ok(())
    }

    pub fn to_query(&self) -> Query {
        let mut query = self.list.to_query();
        if let Some(reorder) = self.reorder {
            query.push(("reorder", reorder.to_string()));
        }
        if let Some(address) = &self.address {
            query.push(("address", address.trim().to_string()));
        }
        query
    }
}

/// Pool transaction paging. `cursor` continues from a previous response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl TransactionParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_limit(self.limit, MAX_PAGE_LIMIT)?;
        if let Some(cursor) = &self.cursor {
            if cursor.trim().is_empty() {
                return Err(ValidationError::Blank { param: "cursor" });
            }
        }
        Ok(())
    }

    pub fn to_query(&self) -> Query {
        let mut query = PageParams {
            page: self.page,
            limit: self.limit,
        }
        .to_query();
        if let Some(cursor) = &self.cursor {
            query.push(("cursor", cursor.clone()));
        }
        query
    }
}

/// OHLCV candle request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OhlcvParams {
    pub start: TimeBound,
    pub end: Option<TimeBound>,
    pub limit: Option<u32>,
    pub interval: Option<OhlcvInterval>,
    /// Quote the first token in terms of the second
    pub inversed: bool,
}

impl OhlcvParams {
    pub fn new(start: impl Into<TimeBound>) -> Self {
        Self {
            start: start.into(),
            end: None,
            limit: None,
            interval: None,
            inversed: false,
        }
    }

    pub fn end(mut self, end: impl Into<TimeBound>) -> Self {
        self.end = Some(end.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn interval(mut self, interval: OhlcvInterval) -> Self {
        self.interval = Some(interval);
        self
    }

    pub fn inversed(mut self, inversed: bool) -> Self {
        self.inversed = inversed;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_limit(self.limit, MAX_OHLCV_LIMIT)?;
        if let Some(end) = &self.end {
            if end.unix_seconds() < self.start.unix_seconds() {
                return Err(ValidationError::InvalidRange {
                    param: "end",
                    reason: format!("{} is earlier than start {}", end, self.start),
                });
            }
        }
        Ok(())
    }

    pub fn to_query(&self) -> Query {
        let mut query: Query = vec![("start", self.start.to_string())];
        if let Some(end) = &self.end {
            query.push(("end", end.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(interval) = self.interval {
            query.push(("interval", interval.as_str().to_string()));
        }
        if self.inversed {
            query.push(("inversed", "true".to_string()));
        }
        query
    }
}
