use crate::application::interfaces::DataAccess;
use crate::error::DamError;
use crate::model::range::TimeRange;
use crate::model::records::{FundamentalMap, Quote, Tick};
use crate::model::symbol::Symbol;
use crate::storage::config::DamConfig;
use crate::storage::registry::{ConnectionRegistry, Engine};
use crate::storage::schema::{
    FundamentalRow, QuoteRow, SELECT_FUNDAMENTAL, SELECT_QUOTE_STATS, SELECT_QUOTES,
    SELECT_TICKS, TickRow,
};
use crate::storage::session::{PendingRow, Session};
use crate::storage::translate::{fundamental_to_rows, quote_to_row, rows_to_fundamental, tick_to_row};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{Any, FromRow};
use std::sync::Arc;
use tracing::{debug, info};

/// Row count and time bounds of a symbol's quotes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct QuoteStats {
    /// Number of stored quotes
    pub total_records: i64,
    /// Earliest quote time, `None` without rows
    pub first_time: Option<i64>,
    /// Latest quote time, `None` without rows
    pub last_time: Option<i64>,
}

/// Data access module backed by a SQL store
///
/// Each instance owns one [`Session`]; engines are shared through the
/// [`ConnectionRegistry`] handed to [`SqlDam::new`].
pub struct SqlDam {
    registry: Arc<ConnectionRegistry>,
    session: Option<Session>,
}

impl SqlDam {
    /// Creates a module that is not yet bound to a store
    #[must_use]
    pub fn new(registry: Arc<ConnectionRegistry>) -> Self {
        Self {
            registry,
            session: None,
        }
    }

    /// Whether [`DataAccess::setup`] has bound a session
    #[must_use]
    pub fn is_set_up(&self) -> bool {
        self.session.is_some()
    }

    /// The engine of the current session
    #[must_use]
    pub fn engine(&self) -> Option<&Engine> {
        self.session.as_ref().map(Session::engine)
    }

    /// Rows staged since the last flush
    #[must_use]
    pub fn pending_rows(&self) -> usize {
        self.session.as_ref().map_or(0, Session::pending_rows)
    }

    /// Number of quotes stored for `symbol` and their time bounds
    ///
    /// # Errors
    /// [`DamError::NotSetUp`] before setup, [`DamError::Db`] on store errors.
    pub async fn quote_stats(&mut self, symbol: &Symbol) -> Result<QuoteStats, DamError> {
        let session = self.session_mut()?;
        session
            .fetch_one(sqlx::query_as::<Any, QuoteStats>(SELECT_QUOTE_STATS).bind(symbol.as_str()))
            .await
    }

    fn session_mut(&mut self) -> Result<&mut Session, DamError> {
        self.session.as_mut().ok_or(DamError::NotSetUp)
    }
}

#[async_trait]
impl DataAccess for SqlDam {
    async fn setup(&mut self, config: &DamConfig) -> Result<(), DamError> {
        let engine = self.registry.engine(config).await?;
        if let Some(mut previous) = self.session.take() {
            previous.rollback().await?;
        }
        info!("Data access module set up on {}", engine.dialect());
        self.session = Some(Session::new(engine));
        Ok(())
    }

    async fn read_quotes(
        &mut self,
        symbol: &Symbol,
        range: TimeRange,
    ) -> Result<Vec<Quote>, DamError> {
        let session = self.session_mut()?;
        let rows = session
            .fetch_all(
                sqlx::query_as::<Any, QuoteRow>(SELECT_QUOTES)
                    .bind(symbol.as_str())
                    .bind(range.start)
                    .bind(range.upper()),
            )
            .await?;
        debug!("Read {} quotes for {}", rows.len(), symbol);
        Ok(rows.into_iter().map(Quote::from).collect())
    }

    async fn read_ticks(
        &mut self,
        symbol: &Symbol,
        range: TimeRange,
    ) -> Result<Vec<Tick>, DamError> {
        let session = self.session_mut()?;
        let rows = session
            .fetch_all(
                sqlx::query_as::<Any, TickRow>(SELECT_TICKS)
                    .bind(symbol.as_str())
                    .bind(range.start)
                    .bind(range.upper()),
            )
            .await?;
        debug!("Read {} ticks for {}", rows.len(), symbol);
        Ok(rows.into_iter().map(Tick::from).collect())
    }

    fn write_quotes(&mut self, symbol: &Symbol, quotes: &[Quote]) -> Result<(), DamError> {
        let session = self.session_mut()?;
        session.stage(
            quotes
                .iter()
                .map(|quote| PendingRow::Quote(quote_to_row(symbol, quote))),
        );
        Ok(())
    }

    fn write_ticks(&mut self, symbol: &Symbol, ticks: &[Tick]) -> Result<(), DamError> {
        let session = self.session_mut()?;
        session.stage(
            ticks
                .iter()
                .map(|tick| PendingRow::Tick(tick_to_row(symbol, tick))),
        );
        Ok(())
    }

    fn write_fundamental(
        &mut self,
        symbol: &Symbol,
        fundamentals: &FundamentalMap,
    ) -> Result<(), DamError> {
        let session = self.session_mut()?;
        session.stage(
            fundamental_to_rows(symbol, fundamentals)
                .into_iter()
                .map(PendingRow::Fundamental),
        );
        Ok(())
    }

    async fn read_fundamental(&mut self, symbol: &Symbol) -> Result<FundamentalMap, DamError> {
        let session = self.session_mut()?;
        let rows = session
            .fetch_all(
                sqlx::query_as::<Any, FundamentalRow>(SELECT_FUNDAMENTAL).bind(symbol.as_str()),
            )
            .await?;
        debug!("Read {} fundamental rows for {}", rows.len(), symbol);
        Ok(rows_to_fundamental(rows))
    }

    async fn commit(&mut self) -> Result<usize, DamError> {
        self.session_mut()?.commit().await
    }

    async fn teardown(&mut self) -> Result<(), DamError> {
        if let Some(mut session) = self.session.take() {
            session.rollback().await?;
            debug!("Session released");
        }
        Ok(())
    }
}
