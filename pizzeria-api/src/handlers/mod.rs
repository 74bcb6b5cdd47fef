pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

use axum::{Router, response::Html, routing::get};
use pizzeria_service::{PizzeriaService, ServiceError};
use utoipa::OpenApi;

use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub service: PizzeriaService,
}

impl AppState {
    /// Runs a service call on the blocking pool; diesel connections are synchronous.
    pub async fn call<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&PizzeriaService) -> Result<T, ServiceError> + Send + 'static,
        T: Send + 'static,
    {
        let service = self.service.clone();
        tokio::task::spawn_blocking(move || f(&service))
            .await
            .map_err(|e| ApiError::InternalError(format!("service task failed: {e}")))?
            .map_err(ApiError::from)
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .merge(restaurant::router())
        .merge(pizza::router())
        .merge(restaurant_pizza::router())
}

async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

#[derive(OpenApi)]
#[openapi(
    paths(
        restaurant::list_restaurants,
        restaurant::get_restaurant,
        restaurant::delete_restaurant,
        pizza::list_pizzas,
        restaurant_pizza::create_restaurant_pizza,
    ),
    components(
        schemas(
            pizzeria_service::serializer::RestaurantSummary,
            pizzeria_service::serializer::RestaurantDetails,
            pizzeria_service::serializer::RestaurantPizzaDetails,
            pizzeria_service::serializer::RestaurantPizzaCreated,
            pizzeria_service::serializer::PizzaSummary,
            crate::models::CreateRestaurantPizzaRequest,
            crate::models::ApiErrorResponse,
            crate::models::ApiErrorsResponse
        )
    ),
    tags(
        (name = "restaurants", description = "Restaurant endpoints"),
        (name = "pizzas", description = "Pizza endpoints"),
        (name = "restaurant_pizzas", description = "Pizza pricing endpoints")
    ),
    info(
        title = "Pizzeria API",
        description = "Restaurants, pizzas and what they cost where",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
