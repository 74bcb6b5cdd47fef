use axum::{Router, extract::State, response::Json, routing::get};
use pizzeria_service::serializer::PizzaSummary;
use tracing::instrument;

use crate::error::ApiError;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/pizzas", get(list_pizzas))
}

#[utoipa::path(
    get,
    path = "/pizzas",
    responses(
        (status = 200, description = "List of pizzas", body = [PizzaSummary]),
    ),
    tag = "pizzas"
)]
#[instrument(skip(state))]
pub async fn list_pizzas(
    State(state): State<AppState>,
) -> Result<Json<Vec<PizzaSummary>>, ApiError> {
    let pizzas = state.call(|service| service.list_pizzas()).await?;
    Ok(Json(pizzas))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::handlers::testing::*;

    #[tokio::test]
    async fn test_list_pizzas() {
        let (app, service) = seeded_app();
        service.create_restaurant_pizza(10, 1, 1).unwrap();

        let (status, body) = send_json(&app, get("/pizzas")).await;

        assert_eq!(status, StatusCode::OK);
        let pizzas = body.as_array().unwrap();
        assert_eq!(pizzas.len(), 3);
        assert_eq!(
            pizzas[0],
            json!({"id": 1, "name": "Margherita", "ingredients": "Tomato, Mozzarella"})
        );
        assert!(pizzas.iter().all(|p| p.get("restaurant_pizzas").is_none()));
    }

    #[tokio::test]
    async fn test_list_pizzas_is_repeatable() {
        let (app, _) = seeded_app();

        let (_, first) = send_json(&app, get("/pizzas")).await;
        let (_, second) = send_json(&app, get("/pizzas")).await;

        assert_eq!(first, second);
    }
}
