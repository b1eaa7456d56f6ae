/// Maximum length of a symbol, bounded by the `symbol` column width
pub const SYMBOL_MAX_LEN: usize = 12;
/// Maximum length of a fundamental field name
pub const FIELD_MAX_LEN: usize = 50;
/// Maximum length of a fundamental time stamp
pub const TIME_STAMP_MAX_LEN: usize = 50;
/// Maximum length of the textual volume and adjusted close columns
pub const VOLUME_MAX_LEN: usize = 12;
/// Default size of the connection pool built for each engine
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
/// Upper bound used when a time range has no explicit end
pub const OPEN_END_SENTINEL: i64 = i64::MAX;
/// Default log filter when `LOGLEVEL` is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";
