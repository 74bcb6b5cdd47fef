use axum::{http::StatusCode, response::Json};
use pizzeria_service::ServiceError;
use tracing::error;

use crate::models::{ApiErrorResponse, ApiErrorsResponse};

pub const VALIDATION_ERRORS: &str = "validation errors";
pub const INVALID_JSON: &str = "Invalid JSON";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn validation(message: &str) -> Self {
        ApiError::Validation(vec![message.to_string()])
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(entity) => ApiError::NotFound(entity),
            ServiceError::Validation(_) => ApiError::validation(VALIDATION_ERRORS),
            ServiceError::Database(_) | ServiceError::Pool(_) => {
                error!(error = %e, "storage failure");
                ApiError::InternalError(e.to_string())
            }
        }
    }
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ApiErrorResponse {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ApiErrorsResponse { errors })).into_response()
            }
            ApiError::InternalError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiErrorResponse { error: msg }),
            )
                .into_response(),
        }
    }
}
