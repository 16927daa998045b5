// Runtime configuration read from the environment (and a `.env` file when present).

use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://portfolios.db?mode=rwc";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    /// How long a connection waits for another writer to release the database lock.
    pub busy_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(value) => match value.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "DATABASE_MAX_CONNECTIONS",
                        value,
                    });
                }
            },
        };
        let busy_timeout = match lookup("DATABASE_BUSY_TIMEOUT_MS") {
            None => DEFAULT_BUSY_TIMEOUT,
            Some(value) => match value.trim().parse::<u64>() {
                Ok(millis) => Duration::from_millis(millis),
                Err(_) => {
                    return Err(ConfigError::Invalid {
                        key: "DATABASE_BUSY_TIMEOUT_MS",
                        value,
                    });
                }
            },
        };
        Ok(Self {
            database_url,
            max_connections,
            busy_timeout,
        })
    }
}
