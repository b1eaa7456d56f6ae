//! Conversions between records and table rows.
//!
//! Every function here is pure: rows going in carry the symbol of the call,
//! records coming out drop both `id` and `symbol`.

use crate::model::records::{FundamentalEntry, FundamentalMap, Quote, Tick};
use crate::model::symbol::Symbol;
use crate::storage::schema::{FundamentalRow, QuoteRow, TickRow};

impl From<QuoteRow> for Quote {
    fn from(row: QuoteRow) -> Self {
        Quote {
            time: row.time,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
            adj_close: row.adj_close,
        }
    }
}

impl From<TickRow> for Tick {
    fn from(row: TickRow) -> Self {
        Tick {
            time: row.time,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
        }
    }
}

impl From<FundamentalRow> for FundamentalEntry {
    fn from(row: FundamentalRow) -> Self {
        FundamentalEntry {
            symbol: row.symbol,
            field: row.field,
            time_stamp: row.time_stamp,
            value: row.value,
        }
    }
}

/// Tags a quote with its symbol
#[must_use]
pub fn quote_to_row(symbol: &Symbol, quote: &Quote) -> QuoteRow {
    QuoteRow {
        id: None,
        symbol: symbol.to_string(),
        time: quote.time,
        open: quote.open,
        high: quote.high,
        low: quote.low,
        close: quote.close,
        volume: quote.volume.clone(),
        adj_close: quote.adj_close.clone(),
    }
}

/// Tags a tick with its symbol
#[must_use]
pub fn tick_to_row(symbol: &Symbol, tick: &Tick) -> TickRow {
    TickRow {
        id: None,
        symbol: symbol.to_string(),
        time: tick.time,
        open: tick.open,
        high: tick.high,
        low: tick.low,
        close: tick.close,
        volume: tick.volume.clone(),
    }
}

/// Flattens a fundamentals map into one row per `(field, time_stamp, value)`
#[must_use]
pub fn fundamental_to_rows(symbol: &Symbol, fundamentals: &FundamentalMap) -> Vec<FundamentalRow> {
    fundamentals
        .iter()
        .flat_map(|(field, series)| {
            series.iter().map(move |(time_stamp, value)| FundamentalRow {
                id: None,
                symbol: symbol.to_string(),
                field: field.clone(),
                time_stamp: time_stamp.clone(),
                value: *value,
            })
        })
        .collect()
}

/// Folds rows into a fundamentals map
///
/// Rows sharing a field accumulate into one series. For a repeated
/// `(field, time_stamp)` pair the later row wins.
#[must_use]
pub fn rows_to_fundamental<I>(rows: I) -> FundamentalMap
where
    I: IntoIterator<Item = FundamentalRow>,
{
    let mut fundamentals = FundamentalMap::new();
    for row in rows {
        fundamentals
            .entry(row.field)
            .or_default()
            .insert(row.time_stamp, row.value);
    }
    fundamentals
}

/// Flattens a fundamentals map into entries for `symbol`
#[must_use]
pub fn fundamental_to_entries(symbol: &Symbol, fundamentals: &FundamentalMap) -> Vec<FundamentalEntry> {
    fundamental_to_rows(symbol, fundamentals)
        .into_iter()
        .map(FundamentalEntry::from)
        .collect()
}

/// Folds entries into a fundamentals map, ignoring their symbols
#[must_use]
pub fn entries_to_fundamental<I>(entries: I) -> FundamentalMap
where
    I: IntoIterator<Item = FundamentalEntry>,
{
    let mut fundamentals = FundamentalMap::new();
    for entry in entries {
        fundamentals
            .entry(entry.field)
            .or_default()
            .insert(entry.time_stamp, entry.value);
    }
    fundamentals
}
