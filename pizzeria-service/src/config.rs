use std::env;

use crate::error::ConfigError;

pub const DEFAULT_DATABASE_URL: &str = "app.db";
pub const DEFAULT_POOL_SIZE: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
}

impl DatabaseConfig {
    /// Reads `DATABASE_URL` (or `DB_URI`) and `DATABASE_POOL_SIZE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env::var("DATABASE_URL")
            .or_else(|_| env::var("DB_URI"))
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let pool_size = match env::var("DATABASE_POOL_SIZE") {
            Ok(raw) => parse_pool_size(&raw)?,
            Err(_) => DEFAULT_POOL_SIZE,
        };

        Ok(Self {
            url: normalize_database_url(&url),
            pool_size,
        })
    }
}

/// Diesel's SQLite backend takes a plain path, so SQLAlchemy-style
/// `sqlite:///path` URLs are accepted and reduced to the path.
pub fn normalize_database_url(url: &str) -> String {
    url.strip_prefix("sqlite://").unwrap_or(url).to_string()
}

fn parse_pool_size(raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(ConfigError::InvalidValue {
            field: "DATABASE_POOL_SIZE",
            reason: "must be at least 1".to_string(),
        }),
        Ok(size) => Ok(size),
        Err(e) => Err(ConfigError::InvalidValue {
            field: "DATABASE_POOL_SIZE",
            reason: e.to_string(),
        }),
    }
}
