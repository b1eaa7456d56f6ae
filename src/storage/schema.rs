use crate::constants::{FIELD_MAX_LEN, SYMBOL_MAX_LEN, TIME_STAMP_MAX_LEN, VOLUME_MAX_LEN};
use crate::error::DamError;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// SQL dialect of an engine, derived from its connection string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dialect {
    /// PostgreSQL (`postgres://` or `postgresql://`)
    Postgres,
    /// SQLite (`sqlite:`)
    Sqlite,
}

impl Dialect {
    /// Detects the dialect from a connection string
    ///
    /// # Errors
    /// Returns [`DamError::InvalidInput`] for unsupported schemes.
    pub fn from_url(url: &str) -> Result<Self, DamError> {
        let lower = url.trim().to_ascii_lowercase();
        if lower.starts_with("postgres://") || lower.starts_with("postgresql://") {
            Ok(Dialect::Postgres)
        } else if lower.starts_with("sqlite:") {
            Ok(Dialect::Sqlite)
        } else {
            Err(DamError::InvalidInput(format!(
                "unsupported connection string scheme: {url}"
            )))
        }
    }

    fn primary_key(self) -> &'static str {
        match self {
            Dialect::Postgres => "BIGSERIAL PRIMARY KEY",
            Dialect::Sqlite => "INTEGER PRIMARY KEY AUTOINCREMENT",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Postgres => f.write_str("postgres"),
            Dialect::Sqlite => f.write_str("sqlite"),
        }
    }
}

/// Row of the `fundamental` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct FundamentalRow {
    /// Surrogate key, `None` until the row is stored
    pub id: Option<i64>,
    /// Instrument symbol
    pub symbol: String,
    /// Series name
    pub field: String,
    /// Reporting period label
    pub time_stamp: String,
    /// Series value
    pub value: f64,
}

/// Row of the `quotes` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct QuoteRow {
    /// Surrogate key, `None` until the row is stored
    pub id: Option<i64>,
    /// Instrument symbol
    pub symbol: String,
    /// Epoch seconds
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
    /// Adjusted close
    pub adj_close: String,
}

/// Row of the `ticks` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TickRow {
    /// Surrogate key, `None` until the row is stored
    pub id: Option<i64>,
    /// Instrument symbol
    pub symbol: String,
    /// Epoch seconds
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

/// Table names managed by the module
pub const TABLES: [&str; 3] = ["fundamental", "quotes", "ticks"];

/// `CREATE TABLE IF NOT EXISTS` and index statements for every table
#[must_use]
pub fn create_statements(dialect: Dialect) -> Vec<String> {
    let pk = dialect.primary_key();
    vec![
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS fundamental (
                id {pk},
                symbol VARCHAR({SYMBOL_MAX_LEN}) NOT NULL,
                field VARCHAR({FIELD_MAX_LEN}) NOT NULL,
                time_stamp VARCHAR({TIME_STAMP_MAX_LEN}) NOT NULL,
                value DOUBLE PRECISION NOT NULL
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS quotes (
                id {pk},
                symbol VARCHAR({SYMBOL_MAX_LEN}) NOT NULL,
                time BIGINT NOT NULL,
                open DOUBLE PRECISION NOT NULL,
                high DOUBLE PRECISION NOT NULL,
                low DOUBLE PRECISION NOT NULL,
                close DOUBLE PRECISION NOT NULL,
                volume VARCHAR({VOLUME_MAX_LEN}) NOT NULL,
                adj_close VARCHAR({VOLUME_MAX_LEN}) NOT NULL
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS ticks (
                id {pk},
                symbol VARCHAR({SYMBOL_MAX_LEN}) NOT NULL,
                time BIGINT NOT NULL,
                open DOUBLE PRECISION NOT NULL,
                high DOUBLE PRECISION NOT NULL,
                low DOUBLE PRECISION NOT NULL,
                close DOUBLE PRECISION NOT NULL,
                volume VARCHAR({VOLUME_MAX_LEN}) NOT NULL
            )
            "#
        ),
        "CREATE INDEX IF NOT EXISTS idx_fundamental_symbol ON fundamental(symbol)".to_string(),
        "CREATE INDEX IF NOT EXISTS idx_quotes_symbol_time ON quotes(symbol, time)".to_string(),
        "CREATE INDEX IF NOT EXISTS idx_ticks_symbol_time ON ticks(symbol, time)".to_string(),
    ]
}

pub(crate) const INSERT_FUNDAMENTAL: &str =
    "INSERT INTO fundamental (symbol, field, time_stamp, value) VALUES ($1, $2, $3, $4)";

pub(crate) const INSERT_QUOTE: &str = r#"
    INSERT INTO quotes (symbol, time, open, high, low, close, volume, adj_close)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
"#;

pub(crate) const INSERT_TICK: &str = r#"
    INSERT INTO ticks (symbol, time, open, high, low, close, volume)
    VALUES ($1, $2, $3, $4, $5, $6, $7)
"#;

// Ordered by id so the latest row wins when folding repeated (field, time_stamp) pairs
pub(crate) const SELECT_FUNDAMENTAL: &str =
    "SELECT id, symbol, field, time_stamp, value FROM fundamental WHERE symbol = $1 ORDER BY id";

pub(crate) const SELECT_QUOTES: &str = r#"
    SELECT id, symbol, time, open, high, low, close, volume, adj_close
    FROM quotes
    WHERE symbol = $1 AND time >= $2 AND time < $3
"#;

pub(crate) const SELECT_TICKS: &str = r#"
    SELECT id, symbol, time, open, high, low, close, volume
    FROM ticks
    WHERE symbol = $1 AND time >= $2 AND time < $3
"#;

pub(crate) const SELECT_QUOTE_STATS: &str = r#"
    SELECT COUNT(*) AS total_records, MIN(time) AS first_time, MAX(time) AS last_time
    FROM quotes
    WHERE symbol = $1
"#;
