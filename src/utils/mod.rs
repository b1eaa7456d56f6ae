/// Environment variable helpers
pub mod config;
/// Tracing subscriber setup
pub mod logger;

pub use config::*;
pub use logger::*;
