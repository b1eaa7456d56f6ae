/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// Reads `env_var`, trimmed, treating an empty value as unset
fn read_env(env_var: &str) -> Option<String> {
    env::var(env_var)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

/// Parses an on/off flag: `1`, `true`, `yes`, `on` and their negatives,
/// case-insensitively
#[must_use]
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parses `env_var`, falling back to `default` when it is unset, blank or
/// unparsable
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match read_env(env_var) {
        Some(val) => val.parse::<T>().unwrap_or_else(|e| {
            warn!("Failed to parse {}={}: {:?}, using default", env_var, val, e);
            default
        }),
        None => default,
    }
}

/// Parses `env_var`; `None` when it is unset, blank or unparsable
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    read_env(env_var).and_then(|val| val.parse::<T>().ok())
}

/// Reads an on/off flag (see [`parse_flag`]), falling back to `default`
pub fn get_env_flag(env_var: &str, default: bool) -> bool {
    match read_env(env_var) {
        Some(val) => parse_flag(&val).unwrap_or_else(|| {
            warn!("{}={} is not an on/off flag, using {}", env_var, val, default);
            default
        }),
        None => default,
    }
}
