use std::{env, net::SocketAddr};

use pizzeria_service::config::DatabaseConfig;
use pizzeria_service::error::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5555";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub database: DatabaseConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                field: "BIND_ADDR",
                reason: format!("{raw_addr:?}: {e}"),
            })?;

        Ok(Self {
            bind_addr,
            database: DatabaseConfig::from_env()?,
        })
    }
}
