pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod schema;
pub mod seed;
pub mod serializer;
pub mod service;

pub use error::{ServiceError, ValidationError};
pub use service::PizzeriaService;

use config::DatabaseConfig;
use db::DbPool;
use dotenvy::dotenv;

/// Loads `.env`, reads the database settings and opens a pool.
pub fn establish_pool() -> Result<DbPool, Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();

    let config = DatabaseConfig::from_env()?;
    Ok(db::create_pool(&config.url, config.pool_size)?)
}
