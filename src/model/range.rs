use crate::constants::OPEN_END_SENTINEL;
use crate::error::DamError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::{Range, RangeFrom};

/// Half-open time filter `[start, end)` over integer timestamps
///
/// A missing `end` leaves the range open; reads then use
/// [`OPEN_END_SENTINEL`] as the upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Inclusive lower bound
    pub start: i64,
    /// Exclusive upper bound, `None` for unbounded
    pub end: Option<i64>,
}

impl TimeRange {
    /// Range covering `[start, end)`
    #[must_use]
    pub fn between(start: i64, end: i64) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Range covering everything from `start` on
    #[must_use]
    pub fn since(start: i64) -> Self {
        Self { start, end: None }
    }

    /// Range covering every representable timestamp
    #[must_use]
    pub fn all() -> Self {
        Self::since(i64::MIN)
    }

    /// Builds a range from textual bounds
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns [`DamError::TypeConversion`] when a bound is not an integer.
    pub fn parse(start: &str, end: Option<&str>) -> Result<Self, DamError> {
        let start = parse_bound(start)?;
        let end = end.map(parse_bound).transpose()?;
        Ok(Self { start, end })
    }

    /// Builds a range from UTC datetimes, truncated to epoch seconds
    #[must_use]
    pub fn from_dates(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> Self {
        Self {
            start: start.timestamp(),
            end: end.map(|e| e.timestamp()),
        }
    }

    /// The exclusive upper bound used in queries
    #[must_use]
    pub fn upper(&self) -> i64 {
        self.end.unwrap_or(OPEN_END_SENTINEL)
    }

    /// Whether `time` falls inside the range
    #[must_use]
    pub fn contains(&self, time: i64) -> bool {
        time >= self.start && time < self.upper()
    }
}

impl From<Range<i64>> for TimeRange {
    fn from(range: Range<i64>) -> Self {
        Self::between(range.start, range.end)
    }
}

impl From<RangeFrom<i64>> for TimeRange {
    fn from(range: RangeFrom<i64>) -> Self {
        Self::since(range.start)
    }
}

fn parse_bound(value: &str) -> Result<i64, DamError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|e| DamError::TypeConversion {
            value: value.to_string(),
            reason: e.to_string(),
        })
}
