//! Start/end bounds for OHLCV ranges.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::fmt;

/// One end of a time range.
///
/// The API takes either a calendar date (`YYYY-MM-DD`) or a unix timestamp;
/// this type renders whichever it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBound {
    Date(NaiveDate),
    Instant(DateTime<Utc>),
}

impl TimeBound {
    /// Seconds since the epoch. Dates count from midnight UTC.
    pub fn unix_seconds(&self) -> i64 {
        match self {
            Self::Date(date) => date.and_time(NaiveTime::MIN).and_utc().timestamp(),
            Self::Instant(instant) => instant.timestamp(),
        }
    }
}

impl From<NaiveDate> for TimeBound {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<DateTime<Utc>> for TimeBound {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::Instant(instant)
    }
}

impl fmt::Display for TimeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Instant(instant) => write!(f, "{}", instant.timestamp()),
        }
    }
}
