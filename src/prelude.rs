/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # SQL DAM Prelude
//!
//! Re-exports the types needed by most callers:
//!
//! ```rust
//! use sql_dam::prelude::*;
//!
//! let range = TimeRange::between(0, 100);
//! assert!(range.contains(42));
//! ```

/// Library version information
pub use crate::{VERSION, version};

/// Main error type for the library
pub use crate::error::DamError;

/// Data access interface
pub use crate::application::interfaces::DataAccess;

/// Records and value types
pub use crate::model::range::TimeRange;
pub use crate::model::records::{FundamentalEntry, FundamentalMap, Quote, Tick};
pub use crate::model::symbol::Symbol;

/// Storage
pub use crate::storage::config::DamConfig;
pub use crate::storage::registry::{ConnectionRegistry, Engine};
pub use crate::storage::schema::Dialect;
pub use crate::storage::session::Session;
pub use crate::storage::sql_dam::{QuoteStats, SqlDam};

/// Logging
pub use crate::utils::logger::setup_logger;
