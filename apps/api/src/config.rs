//! API server configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use serde::Serialize;

/// API server configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
    /// HTTP listen port
    pub http_port: u16,

    /// Interface to bind
    pub bind_addr: IpAddr,

    /// SQLite database file
    pub db_path: PathBuf,

    /// Pool size, at least 1
    pub db_max_connections: u32,

    /// Directory served for non-API GET requests
    pub web_dir: PathBuf,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup (environment, test map, ...).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let config = ApiConfig {
            http_port: value("IRONMONGER_HTTP_PORT", "8080")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("IRONMONGER_HTTP_PORT".to_string()))?,

            bind_addr: value("IRONMONGER_BIND_ADDR", "0.0.0.0")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("IRONMONGER_BIND_ADDR".to_string()))?,

            db_path: PathBuf::from(value("IRONMONGER_DB_PATH", "data.db")),

            db_max_connections: value("IRONMONGER_DB_MAX_CONNECTIONS", "5")
                .parse()
                .map_err(|_| {
                    ConfigError::InvalidValue("IRONMONGER_DB_MAX_CONNECTIONS".to_string())
                })?,

            web_dir: PathBuf::from(value("IRONMONGER_WEB_DIR", "web")),
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "IRONMONGER_DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        Ok(config)
    }

    /// Address the server listens on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.http_port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
