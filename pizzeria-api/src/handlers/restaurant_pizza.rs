use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
    routing::post,
};
use pizzeria_service::serializer::RestaurantPizzaCreated;
use serde_json::Value;
use tracing::{instrument, warn};

use crate::error::{ApiError, INVALID_JSON, VALIDATION_ERRORS};
use crate::models::{ApiErrorsResponse, CreateRestaurantPizzaRequest};

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/restaurant_pizzas", post(create_restaurant_pizza))
}

/// Bodies that carry no data at all: `null`, `false`, `0`, `""`, `[]`, `{}`.
fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn parse_payload(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<CreateRestaurantPizzaRequest, ApiError> {
    let value = match payload {
        Ok(Json(value)) if !is_empty_payload(&value) => value,
        Ok(Json(value)) => {
            warn!(%value, "empty restaurant pizza payload");
            return Err(ApiError::validation(INVALID_JSON));
        }
        Err(e) => {
            warn!(error = %e.body_text(), "unreadable restaurant pizza payload");
            return Err(ApiError::validation(INVALID_JSON));
        }
    };

    // well-formed JSON that does not fit the request shape
    serde_json::from_value(value).map_err(|e| {
        warn!(error = %e, "rejected restaurant pizza payload");
        ApiError::validation(VALIDATION_ERRORS)
    })
}

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Pizza priced at the restaurant", body = RestaurantPizzaCreated),
        (status = 400, description = "Invalid body, price, pizza or restaurant", body = ApiErrorsResponse),
    ),
    tag = "restaurant_pizzas"
)]
#[instrument(skip(state))]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantPizzaCreated>), ApiError> {
    let request = parse_payload(payload)?;

    let created = state
        .call(move |service| {
            service.create_restaurant_pizza(request.price, request.pizza_id, request.restaurant_id)
        })
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}
