use crate::error::DamError;
use crate::model::range::TimeRange;
use crate::model::records::{FundamentalMap, Quote, Tick};
use crate::model::symbol::Symbol;
use crate::storage::config::DamConfig;
use async_trait::async_trait;
use std::collections::HashMap;

/// Interface of a data access module for quotes, ticks and fundamentals
///
/// Writes only stage records; nothing is durable until [`DataAccess::commit`].
#[async_trait]
pub trait DataAccess: Send {
    /// Binds the module to the store named by `config.db` and opens a fresh session
    async fn setup(&mut self, config: &DamConfig) -> Result<(), DamError>;

    /// Quotes of `symbol` with `range.start <= time < range.end`, in store order
    async fn read_quotes(
        &mut self,
        symbol: &Symbol,
        range: TimeRange,
    ) -> Result<Vec<Quote>, DamError>;

    /// Ticks of `symbol` with `range.start <= time < range.end`, in store order
    async fn read_ticks(&mut self, symbol: &Symbol, range: TimeRange)
    -> Result<Vec<Tick>, DamError>;

    /// Stages quotes for `symbol`
    fn write_quotes(&mut self, symbol: &Symbol, quotes: &[Quote]) -> Result<(), DamError>;

    /// Stages ticks for `symbol`
    fn write_ticks(&mut self, symbol: &Symbol, ticks: &[Tick]) -> Result<(), DamError>;

    /// Stages one row per `(field, time_stamp, value)` of `fundamentals`
    fn write_fundamental(
        &mut self,
        symbol: &Symbol,
        fundamentals: &FundamentalMap,
    ) -> Result<(), DamError>;

    /// Every fundamental of `symbol` as `field -> time_stamp -> value`
    async fn read_fundamental(&mut self, symbol: &Symbol) -> Result<FundamentalMap, DamError>;

    /// Makes staged writes durable in one transaction, returning the row count
    async fn commit(&mut self) -> Result<usize, DamError>;

    /// Releases the session; pending writes are discarded
    async fn teardown(&mut self) -> Result<(), DamError>;

    /// Quotes for several symbols at once
    ///
    /// Every requested symbol is present in the result, with an empty vector
    /// when it has no rows in `range`.
    async fn read_batch_quotes(
        &mut self,
        symbols: &[Symbol],
        range: TimeRange,
    ) -> Result<HashMap<Symbol, Vec<Quote>>, DamError> {
        let mut batch = HashMap::with_capacity(symbols.len());
        for symbol in symbols {
            let quotes = self.read_quotes(symbol, range).await?;
            batch.insert(symbol.clone(), quotes);
        }
        Ok(batch)
    }
}
