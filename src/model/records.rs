/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fundamentals keyed by field name, then by reporting period
///
/// `{"EPS": {"2011Q1": 1.5, "2011Q2": 1.7}}`
pub type FundamentalMap = BTreeMap<String, BTreeMap<String, f64>>;

/// A bar of market data for one period
///
/// Quotes carry no symbol; the symbol is attached when the quote is persisted.
/// `volume` and `adj_close` are kept as text, matching the `quotes` table.
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
pub struct Quote {
    /// Start of the period, seconds since the Unix epoch
    pub time: i64,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Traded volume
    pub volume: String,
    /// Dividend and split adjusted close
    pub adj_close: String,
}

impl Quote {
    /// Creates a new quote
    #[must_use]
    pub fn new(
        time: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: impl Into<String>,
        adj_close: impl Into<String>,
    ) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume: volume.into(),
            adj_close: adj_close.into(),
        }
    }

    /// The quote time as a UTC datetime, `None` when out of chrono's range
    #[must_use]
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }
}

/// A tick: a quote without adjusted close
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
pub struct Tick {
    /// Tick time, seconds since the Unix epoch
    pub time: i64,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Traded volume
    pub volume: String,
}

impl Tick {
    /// Creates a new tick
    #[must_use]
    pub fn new(
        time: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: impl Into<String>,
    ) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume: volume.into(),
        }
    }

    /// The tick time as a UTC datetime, `None` when out of chrono's range
    #[must_use]
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }
}

/// One value of a named fundamental series
///
/// `time_stamp` is an opaque reporting period label such as `"2011Q1"`, unlike
/// the integer times of quotes and ticks.
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
pub struct FundamentalEntry {
    /// Instrument symbol
    pub symbol: String,
    /// Series name, e.g. `"EPS"`
    pub field: String,
    /// Reporting period label
    pub time_stamp: String,
    /// Series value
    pub value: f64,
}

impl FundamentalEntry {
    /// Creates a new fundamental entry
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        field: impl Into<String>,
        time_stamp: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            field: field.into(),
            time_stamp: time_stamp.into(),
            value,
        }
    }
}
