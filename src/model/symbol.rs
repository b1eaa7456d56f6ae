/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::SYMBOL_MAX_LEN;
use crate::error::DamError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Anything printable; the store column only bounds the length
static SYMBOL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\P{Cc}+$").unwrap_or_else(|e| panic!("invalid symbol pattern: {e}"))
});

/// An instrument symbol accepted by the `symbol` columns
///
/// Symbols are non-empty, at most [`SYMBOL_MAX_LEN`] characters long and
/// free of control characters. Spaces and punctuation such as `&`, `.` or
/// `^` are kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Validates and wraps a symbol
    ///
    /// # Errors
    /// Returns [`DamError::InvalidInput`] when the symbol is empty, too long or
    /// contains control characters.
    pub fn new(symbol: impl Into<String>) -> Result<Self, DamError> {
        let symbol = symbol.into();
        if symbol.is_empty() {
            return Err(DamError::InvalidInput("symbol must not be empty".to_string()));
        }
        if symbol.chars().count() > SYMBOL_MAX_LEN {
            return Err(DamError::InvalidInput(format!(
                "symbol '{symbol}' is longer than {SYMBOL_MAX_LEN} characters"
            )));
        }
        if !SYMBOL_PATTERN.is_match(&symbol) {
            return Err(DamError::InvalidInput(format!(
                "symbol {symbol:?} contains control characters"
            )));
        }
        Ok(Self(symbol))
    }

    /// The symbol text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Symbol {
    type Err = DamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::new(s)
    }
}

impl TryFrom<String> for Symbol {
    type Error = DamError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Symbol::new(value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = DamError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Symbol::new(value)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}
