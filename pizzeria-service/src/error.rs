use thiserror::Error;

/// Reasons a write is refused before (or while) touching storage.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("price {0} is outside {min}..={max}", min = crate::models::MIN_PRICE, max = crate::models::MAX_PRICE)]
    PriceOutOfRange(i64),

    #[error("pizza {0} does not exist")]
    UnknownPizza(i32),

    #[error("restaurant {0} does not exist")]
    UnknownRestaurant(i32),

    #[error("write rejected by storage: {0}")]
    Rejected(#[source] diesel::result::Error),
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("validation errors")]
    Validation(#[from] ValidationError),

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

/// Configuration errors raised while reading the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
