/// Module containing database configuration structures
pub mod config;
/// Engines and the connection registry
pub mod registry;
/// Row types and table definitions
pub mod schema;
/// Unit of work staging rows until commit
pub mod session;
/// SQL-backed data access module
pub mod sql_dam;
/// Record and row conversions
pub mod translate;
