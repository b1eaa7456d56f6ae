//! # SQL DAM
//!
//! A data access module that persists financial time series (quotes, ticks and
//! fundamentals) to a relational store and reads them back filtered by symbol
//! and time range.
//!
//! The crate is a thin translation layer between in-memory records and rows:
//!
//! * [`model`] holds the record and value types ([`model::records::Quote`],
//!   [`model::records::Tick`], [`model::records::FundamentalMap`],
//!   [`model::symbol::Symbol`], [`model::range::TimeRange`]).
//! * [`storage`] holds the row schemas, the connection registry, the session
//!   (unit of work) and the [`storage::sql_dam::SqlDam`] façade.
//! * [`application::interfaces`] defines the [`application::interfaces::DataAccess`]
//!   trait implemented by the façade.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sql_dam::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), DamError> {
//! let registry = Arc::new(ConnectionRegistry::new());
//! let mut dam = SqlDam::new(registry);
//! dam.setup(&DamConfig::new("sqlite://quotes.db?mode=rwc")).await?;
//!
//! let aapl = Symbol::new("AAPL")?;
//! let quote = Quote::new(1_320_796_800, 400.0, 410.0, 395.0, 405.0, "1000", "405.0");
//! dam.write_quotes(&aapl, &[quote])?;
//! dam.commit().await?;
//!
//! let quotes = dam.read_quotes(&aapl, TimeRange::since(0)).await?;
//! assert_eq!(quotes.len(), 1);
//! dam.teardown().await?;
//! # Ok(())
//! # }
//! ```

/// Service interfaces exposed by the crate
pub mod application;

/// Crate wide constants
pub mod constants;

/// Error types
pub mod error;

/// Records and value types
pub mod model;

/// Commonly used re-exports
pub mod prelude;

/// Relational persistence: schema, registry, session and the DAM façade
pub mod storage;

/// Configuration and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
