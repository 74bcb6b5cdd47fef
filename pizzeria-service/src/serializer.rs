//! JSON shapes returned by the service, built from database rows.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantSummary {
    pub id: i32,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PizzaSummary {
    pub id: i32,
    pub name: String,
    /// Free-form ingredient list
    pub ingredients: String,
}

/// An association row with its pizza, as nested under a restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantPizzaDetails {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantDetails {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaDetails>,
}

/// A freshly created association with both related entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantPizzaCreated {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaSummary,
    pub restaurant: RestaurantSummary,
}

impl From<models::Restaurant> for RestaurantSummary {
    fn from(r: models::Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            address: r.address,
        }
    }
}

impl From<models::Pizza> for PizzaSummary {
    fn from(p: models::Pizza) -> Self {
        Self {
            id: p.id,
            name: p.name,
            ingredients: p.ingredients,
        }
    }
}

pub fn serialize_restaurant_details(
    restaurant: models::Restaurant,
    restaurant_pizzas: Vec<(models::RestaurantPizza, models::Pizza)>,
) -> RestaurantDetails {
    RestaurantDetails {
        id: restaurant.id,
        name: restaurant.name,
        address: restaurant.address,
        restaurant_pizzas: restaurant_pizzas
            .into_iter()
            .map(|(rp, pizza)| RestaurantPizzaDetails {
                id: rp.id,
                price: rp.price,
                pizza_id: rp.pizza_id,
                restaurant_id: rp.restaurant_id,
                pizza: pizza.into(),
            })
            .collect(),
    }
}

pub fn serialize_restaurant_pizza_created(
    restaurant_pizza: models::RestaurantPizza,
    pizza: models::Pizza,
    restaurant: models::Restaurant,
) -> RestaurantPizzaCreated {
    RestaurantPizzaCreated {
        id: restaurant_pizza.id,
        price: restaurant_pizza.price,
        pizza_id: restaurant_pizza.pizza_id,
        restaurant_id: restaurant_pizza.restaurant_id,
        pizza: pizza.into(),
        restaurant: restaurant.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn margherita() -> models::Pizza {
        models::Pizza {
            id: 1,
            name: "Margherita".to_string(),
            ingredients: "Tomato, Mozzarella".to_string(),
        }
    }

    #[test]
    fn test_restaurant_details_shape() {
        let restaurant = models::Restaurant {
            id: 1,
            name: "Dough Bros".to_string(),
            address: "1 Main St".to_string(),
        };
        let rp = models::RestaurantPizza {
            id: 7,
            price: 10,
            pizza_id: 1,
            restaurant_id: 1,
        };

        let details = serialize_restaurant_details(restaurant, vec![(rp, margherita())]);

        assert_eq!(
            serde_json::to_value(&details).unwrap(),
            json!({
                "id": 1,
                "name": "Dough Bros",
                "address": "1 Main St",
                "restaurant_pizzas": [{
                    "id": 7,
                    "price": 10,
                    "pizza_id": 1,
                    "restaurant_id": 1,
                    "pizza": {"id": 1, "name": "Margherita", "ingredients": "Tomato, Mozzarella"},
                }],
            })
        );
    }

    #[test]
    fn test_restaurant_pizza_created_includes_restaurant() {
        let created = serialize_restaurant_pizza_created(
            models::RestaurantPizza {
                id: 3,
                price: 12,
                pizza_id: 1,
                restaurant_id: 2,
            },
            margherita(),
            models::Restaurant {
                id: 2,
                name: "Slice House".to_string(),
                address: "9 Elm Rd".to_string(),
            },
        );

        let value = serde_json::to_value(&created).unwrap();
        assert_eq!(
            value["restaurant"],
            json!({"id": 2, "name": "Slice House", "address": "9 Elm Rd"})
        );
        assert_eq!(value["pizza"]["name"], "Margherita");
        assert_eq!(value["price"], 12);
    }
}
