use axum::{
    Router,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::Json,
    routing::get,
};
use pizzeria_service::serializer::{RestaurantDetails, RestaurantSummary};
use tracing::instrument;

use crate::error::ApiError;
use crate::models::ApiErrorResponse;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route(
            "/restaurants/{id}",
            get(get_restaurant).delete(delete_restaurant),
        )
}

/// A path id that is not an integer names no restaurant.
fn restaurant_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|_| ApiError::NotFound("Restaurant"))
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "List of restaurants", body = [RestaurantSummary]),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantSummary>>, ApiError> {
    let restaurants = state.call(|service| service.list_restaurants()).await?;
    Ok(Json(restaurants))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    responses(
        (status = 200, description = "Restaurant with its pizzas", body = RestaurantDetails),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn get_restaurant(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<RestaurantDetails>, ApiError> {
    let id = restaurant_id(path)?;
    let restaurant = state.call(move |service| service.get_restaurant(id)).await?;
    Ok(Json(restaurant))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    responses(
        (status = 204, description = "Restaurant and its pizza prices deleted"),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = restaurant_id(path)?;
    state
        .call(move |service| service.delete_restaurant(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;

    use crate::handlers::testing::*;

    fn delete(uri: &str) -> Request<Body> {
        Request::delete(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_list_restaurants() {
        let (app, _) = seeded_app();

        let (status, body) = send_json(&app, get("/restaurants")).await;

        assert_eq!(status, StatusCode::OK);
        let restaurants = body.as_array().unwrap();
        assert_eq!(restaurants.len(), 3);
        assert_eq!(
            restaurants[0],
            json!({"id": 1, "name": "Dough Bros", "address": "1 Main St"})
        );
        assert!(restaurants[0].get("restaurant_pizzas").is_none());
    }

    #[tokio::test]
    async fn test_get_restaurant() {
        let (app, service) = seeded_app();
        service.create_restaurant_pizza(10, 1, 1).unwrap();

        let (status, body) = send_json(&app, get("/restaurants/1")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "id": 1,
                "name": "Dough Bros",
                "address": "1 Main St",
                "restaurant_pizzas": [{
                    "id": 1,
                    "price": 10,
                    "pizza_id": 1,
                    "restaurant_id": 1,
                    "pizza": {"id": 1, "name": "Margherita", "ingredients": "Tomato, Mozzarella"},
                }],
            })
        );
    }

    #[tokio::test]
    async fn test_get_restaurant_not_found() {
        let (app, _) = seeded_app();

        let (status, body) = send_json(&app, get("/restaurants/999")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Restaurant not found"}));
    }

    #[tokio::test]
    async fn test_get_restaurant_invalid_id() {
        let (app, _) = seeded_app();

        let (status, body) = send_json(&app, get("/restaurants/abc")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Restaurant not found"}));
    }

    #[tokio::test]
    async fn test_delete_restaurant() {
        let (app, service) = seeded_app();
        service.create_restaurant_pizza(10, 1, 1).unwrap();
        service.create_restaurant_pizza(15, 1, 2).unwrap();

        let (status, body) = send(&app, delete("/restaurants/1")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        let (status, _) = send(&app, get("/restaurants/1")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, other) = send_json(&app, get("/restaurants/2")).await;
        assert_eq!(other["restaurant_pizzas"].as_array().unwrap().len(), 1);
        assert_eq!(other["restaurant_pizzas"][0]["price"], 15);
    }

    #[tokio::test]
    async fn test_delete_restaurant_not_found() {
        let (app, _) = seeded_app();

        let (status, body) = send_json(&app, delete("/restaurants/999")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Restaurant not found"}));
    }
}
