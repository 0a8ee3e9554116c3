use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ASSETS_DIR: &str = "assets";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got '{value}'")]
    InvalidPort { value: String },

    #[error("Cannot parse bind address '{value}'")]
    InvalidAddr { value: String },
}

/// Process configuration, read from the environment (after `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// When set, the roster lives in SQLite instead of memory.
    pub database_url: Option<String>,
    pub seed_path: Option<PathBuf>,
    pub assets_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value: v.clone() })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: get("DATABASE_URL"),
            seed_path: get("ACTIVITIES_SEED").map(PathBuf::from),
            assets_dir: get("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR)),
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_addr(&self.host, self.port)
    }

    /// The next port up, tried when the configured one is taken. There is
    /// none above 65535, and 0 would mean "any port".
    pub fn fallback_addr(&self) -> Result<SocketAddr, ConfigError> {
        let port = self
            .port
            .checked_add(1)
            .ok_or_else(|| ConfigError::InvalidPort {
                value: format!("{} (no fallback port above it)", self.port),
            })?;
        parse_addr(&self.host, port)
    }
}

fn parse_addr(host: &str, port: u16) -> Result<SocketAddr, ConfigError> {
    let value = format!("{}:{}", host, port);
    value
        .parse()
        .map_err(|_| ConfigError::InvalidAddr { value })
}
