/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::DamError;
use crate::storage::registry::Engine;
use crate::storage::schema::{
    FundamentalRow, INSERT_FUNDAMENTAL, INSERT_QUOTE, INSERT_TICK, QuoteRow, TickRow,
};
use sqlx::AnyConnection;
use sqlx::any::{AnyArguments, AnyQueryResult, AnyRow};
use sqlx::query::QueryAs;
use sqlx::{Any, FromRow, Transaction};
use tracing::{debug, error, info, warn};

/// A row waiting to be written
#[derive(Debug, Clone, PartialEq)]
pub enum PendingRow {
    /// Row for the `quotes` table
    Quote(QuoteRow),
    /// Row for the `ticks` table
    Tick(TickRow),
    /// Row for the `fundamental` table
    Fundamental(FundamentalRow),
}

impl PendingRow {
    async fn insert(&self, conn: &mut AnyConnection) -> Result<AnyQueryResult, sqlx::Error> {
        match self {
            PendingRow::Quote(row) => {
                sqlx::query(INSERT_QUOTE)
                    .bind(row.symbol.as_str())
                    .bind(row.time)
                    .bind(row.open)
                    .bind(row.high)
                    .bind(row.low)
                    .bind(row.close)
                    .bind(row.volume.as_str())
                    .bind(row.adj_close.as_str())
                    .execute(conn)
                    .await
            }
            PendingRow::Tick(row) => {
                sqlx::query(INSERT_TICK)
                    .bind(row.symbol.as_str())
                    .bind(row.time)
                    .bind(row.open)
                    .bind(row.high)
                    .bind(row.low)
                    .bind(row.close)
                    .bind(row.volume.as_str())
                    .execute(conn)
                    .await
            }
            PendingRow::Fundamental(row) => {
                sqlx::query(INSERT_FUNDAMENTAL)
                    .bind(row.symbol.as_str())
                    .bind(row.field.as_str())
                    .bind(row.time_stamp.as_str())
                    .bind(row.value)
                    .execute(conn)
                    .await
            }
        }
    }
}

/// Unit of work over one [`Engine`]
///
/// Staged rows stay in memory until [`Session::flush`] sends them inside the
/// session's transaction, and [`Session::commit`] makes them durable. Reads
/// issued while rows are staged or a transaction is open flush first and run
/// inside that transaction, so a session always sees its own writes.
pub struct Session {
    engine: Engine,
    pending: Vec<PendingRow>,
    tx: Option<Transaction<'static, Any>>,
    uncommitted: usize,
}

impl Session {
    /// Creates an idle session on `engine`
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            pending: Vec::new(),
            tx: None,
            uncommitted: 0,
        }
    }

    /// The engine this session runs on
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Rows staged and not yet flushed
    #[must_use]
    pub fn pending_rows(&self) -> usize {
        self.pending.len()
    }

    /// Whether a transaction is open
    #[must_use]
    pub fn in_transaction(&self) -> bool {
        self.tx.is_some()
    }

    /// Queues rows for the next flush; no I/O happens here
    pub fn stage<I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = PendingRow>,
    {
        let before = self.pending.len();
        self.pending.extend(rows);
        debug!("Staged {} rows", self.pending.len() - before);
    }

    /// Sends staged rows to the store inside the session transaction
    ///
    /// On failure the transaction is rolled back and every row written since
    /// the last commit is discarded. The store error is returned even when the
    /// rollback fails too.
    ///
    /// # Errors
    /// Returns [`DamError::Db`] when the store rejects a row.
    pub async fn flush(&mut self) -> Result<usize, DamError> {
        if self.pending.is_empty() {
            return Ok(0);
        }
        let pending = std::mem::take(&mut self.pending);

        let result = match self.transaction().await {
            Ok(tx) => insert_rows(&mut **tx, &pending).await,
            Err(e) => {
                self.pending = pending;
                return Err(e);
            }
        };

        match result {
            Ok(()) => {
                self.uncommitted += pending.len();
                debug!("Flushed {} rows", pending.len());
                Ok(pending.len())
            }
            Err(e) => {
                warn!("Flush of {} rows failed: {}", pending.len(), e);
                if let Err(rollback_err) = self.rollback().await {
                    error!("Rollback after failed flush also failed: {}", rollback_err);
                }
                Err(e.into())
            }
        }
    }

    /// Flushes staged rows and commits the transaction
    ///
    /// Returns the number of rows made durable. Nothing happens when the
    /// session holds no work.
    ///
    /// # Errors
    /// Returns [`DamError::Db`] on constraint violations or connectivity loss.
    pub async fn commit(&mut self) -> Result<usize, DamError> {
        self.flush().await?;
        let committed = std::mem::take(&mut self.uncommitted);
        if let Some(tx) = self.tx.take() {
            tx.commit().await?;
            info!("Transaction committed successfully ({} rows)", committed);
        }
        Ok(committed)
    }

    /// Discards staged rows and rolls back the open transaction
    ///
    /// # Errors
    /// Returns [`DamError::Db`] when the rollback fails.
    pub async fn rollback(&mut self) -> Result<(), DamError> {
        let discarded = self.pending.len() + std::mem::take(&mut self.uncommitted);
        self.pending.clear();
        if let Some(tx) = self.tx.take() {
            tx.rollback().await?;
        }
        if discarded > 0 {
            debug!("Discarded {} uncommitted rows", discarded);
        }
        Ok(())
    }

    /// Runs a typed query, through the session transaction when one is needed
    ///
    /// # Errors
    /// Returns [`DamError::Db`] when the flush or the query fails.
    pub async fn fetch_all<'q, O>(
        &mut self,
        query: QueryAs<'q, Any, O, AnyArguments<'q>>,
    ) -> Result<Vec<O>, DamError>
    where
        O: Send + Unpin + for<'r> FromRow<'r, AnyRow>,
    {
        if self.pending.is_empty() && self.tx.is_none() {
            return Ok(query.fetch_all(self.engine.pool()).await?);
        }
        self.flush().await?;
        let tx = self.transaction().await?;
        Ok(query.fetch_all(&mut **tx).await?)
    }

    /// Same as [`Session::fetch_all`] for queries returning exactly one row
    ///
    /// # Errors
    /// Returns [`DamError::Db`] when the flush or the query fails.
    pub async fn fetch_one<'q, O>(
        &mut self,
        query: QueryAs<'q, Any, O, AnyArguments<'q>>,
    ) -> Result<O, DamError>
    where
        O: Send + Unpin + for<'r> FromRow<'r, AnyRow>,
    {
        if self.pending.is_empty() && self.tx.is_none() {
            return Ok(query.fetch_one(self.engine.pool()).await?);
        }
        self.flush().await?;
        let tx = self.transaction().await?;
        Ok(query.fetch_one(&mut **tx).await?)
    }

    async fn transaction(&mut self) -> Result<&mut Transaction<'static, Any>, DamError> {
        let tx = match self.tx.take() {
            Some(tx) => tx,
            None => {
                debug!("Beginning {} transaction", self.engine.dialect());
                self.engine.pool().begin().await?
            }
        };
        Ok(self.tx.insert(tx))
    }
}

async fn insert_rows(conn: &mut AnyConnection, rows: &[PendingRow]) -> Result<(), sqlx::Error> {
    for row in rows {
        row.insert(&mut *conn).await?;
    }
    Ok(())
}
