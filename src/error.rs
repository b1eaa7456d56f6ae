use thiserror::Error;

/// Errors returned by the data access module
#[derive(Debug, Error)]
pub enum DamError {
    /// Required configuration is missing or malformed
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A time range bound could not be coerced to an integer timestamp
    #[error("type conversion error: cannot convert '{value}' to an integer timestamp: {reason}")]
    TypeConversion {
        /// The offending input
        value: String,
        /// Parser message
        reason: String,
    },

    /// Input rejected before reaching the store
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation needing a session was called before `setup`
    #[error("data access module is not set up")]
    NotSetUp,

    /// Error raised by the underlying store
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),

    /// JSON decoding failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DamError {
    /// Returns the store error when this error originated in the database
    #[must_use]
    pub fn as_db_error(&self) -> Option<&sqlx::Error> {
        match self {
            DamError::Db(e) => Some(e),
            _ => None,
        }
    }
}
