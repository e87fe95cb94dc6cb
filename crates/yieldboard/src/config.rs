use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_COUCHDB_URL: &str = "http://localhost:5984";
pub const DEFAULT_COUCHDB_DATABASE: &str = "stocks";
pub const DEFAULT_QUOTE_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_QUOTE_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_STORE_PATH: &str = "./stocks.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a whole number of seconds, got {value:?}")]
    InvalidSeconds { key: &'static str, value: String },
}

/// Runtime settings, read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub couchdb_url: String,
    pub couchdb_database: String,
    pub quote_api_url: String,
    pub quote_timeout: Duration,
    pub user_agent: String,
    pub store_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let quote_timeout = match var("QUOTE_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidSeconds {
                    key: "QUOTE_TIMEOUT_SECS",
                    value,
                })?,
            None => Duration::from_secs(DEFAULT_QUOTE_TIMEOUT_SECS),
        };

        Ok(Self {
            couchdb_url: var("COUCHDB_URL")
                .unwrap_or_else(|| DEFAULT_COUCHDB_URL.to_string()),
            couchdb_database: var("COUCHDB_DATABASE")
                .unwrap_or_else(|| DEFAULT_COUCHDB_DATABASE.to_string()),
            quote_api_url: var("QUOTE_API_URL")
                .unwrap_or_else(|| DEFAULT_QUOTE_API_URL.to_string()),
            quote_timeout,
            user_agent: var("USER_AGENT").unwrap_or_else(|| {
                concat!("yieldboard/", env!("CARGO_PKG_VERSION")).to_string()
            }),
            store_path: var("STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH)),
        })
    }
}
