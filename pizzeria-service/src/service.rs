use diesel::prelude::*;
use tracing::{debug, info, instrument, warn};

use crate::db::DbPool;
use crate::error::{ServiceError, ValidationError};
use crate::models::{self, NewRestaurantPizza};
use crate::schema::{pizzas, restaurant_pizzas, restaurants};
use crate::serializer::{
    self, PizzaSummary, RestaurantDetails, RestaurantPizzaCreated, RestaurantSummary,
};

/// Read and write operations over restaurants, pizzas and their prices.
///
/// Every call checks a connection out of the pool and returns it when the
/// call ends. Writes run as a single transaction on that connection.
#[derive(Clone)]
pub struct PizzeriaService {
    pool: DbPool,
}

impl PizzeriaService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    #[instrument(skip(self))]
    pub fn list_restaurants(&self) -> Result<Vec<RestaurantSummary>, ServiceError> {
        let conn = &mut self.pool.get()?;
        let results = restaurants::table
            .order_by(restaurants::id)
            .select(models::Restaurant::as_select())
            .load(conn)?;

        debug!(count = results.len(), "loaded restaurants");
        Ok(results.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    pub fn get_restaurant(&self, restaurant_id: i32) -> Result<RestaurantDetails, ServiceError> {
        let conn = &mut self.pool.get()?;
        let restaurant = find_restaurant(conn, restaurant_id)?
            .ok_or(ServiceError::NotFound("Restaurant"))?;

        let restaurant_pizzas = models::RestaurantPizza::belonging_to(&restaurant)
            .inner_join(pizzas::table)
            .order_by(restaurant_pizzas::id)
            .select((
                models::RestaurantPizza::as_select(),
                models::Pizza::as_select(),
            ))
            .load::<(models::RestaurantPizza, models::Pizza)>(conn)?;

        Ok(serializer::serialize_restaurant_details(
            restaurant,
            restaurant_pizzas,
        ))
    }

    /// Deletes a restaurant together with every price row that references it.
    #[instrument(skip(self))]
    pub fn delete_restaurant(&self, restaurant_id: i32) -> Result<(), ServiceError> {
        let conn = &mut self.pool.get()?;
        conn.transaction::<_, ServiceError, _>(|conn| {
            let restaurant = find_restaurant(conn, restaurant_id)?
                .ok_or(ServiceError::NotFound("Restaurant"))?;

            let removed_prices =
                diesel::delete(models::RestaurantPizza::belonging_to(&restaurant)).execute(conn)?;
            diesel::delete(&restaurant).execute(conn)?;

            info!(restaurant_id, removed_prices, "deleted restaurant");
            Ok(())
        })
    }

    #[instrument(skip(self))]
    pub fn list_pizzas(&self) -> Result<Vec<PizzaSummary>, ServiceError> {
        let conn = &mut self.pool.get()?;
        let results = pizzas::table
            .order_by(pizzas::id)
            .select(models::Pizza::as_select())
            .load(conn)?;

        debug!(count = results.len(), "loaded pizzas");
        Ok(results.into_iter().map(Into::into).collect())
    }

    /// Prices a pizza at a restaurant.
    ///
    /// Every failure, including one raised by the database while writing, is
    /// reported as [`ServiceError::Validation`] and leaves storage untouched.
    #[instrument(skip(self))]
    pub fn create_restaurant_pizza(
        &self,
        price: i64,
        pizza_id: i32,
        restaurant_id: i32,
    ) -> Result<RestaurantPizzaCreated, ServiceError> {
        let new_restaurant_pizza = NewRestaurantPizza::new(price, pizza_id, restaurant_id)
            .inspect_err(|e| warn!(error = %e, "rejected restaurant pizza"))?;

        let conn = &mut self.pool.get()?;
        let result = conn.transaction::<_, ServiceError, _>(|conn| {
            let pizza = pizzas::table
                .find(new_restaurant_pizza.pizza_id())
                .select(models::Pizza::as_select())
                .first(conn)
                .optional()?
                .ok_or(ValidationError::UnknownPizza(pizza_id))?;
            let restaurant = find_restaurant(conn, new_restaurant_pizza.restaurant_id())?
                .ok_or(ValidationError::UnknownRestaurant(restaurant_id))?;

            let restaurant_pizza = diesel::insert_into(restaurant_pizzas::table)
                .values(&new_restaurant_pizza)
                .returning(models::RestaurantPizza::as_returning())
                .get_result(conn)?;

            Ok(serializer::serialize_restaurant_pizza_created(
                restaurant_pizza,
                pizza,
                restaurant,
            ))
        });

        match result {
            Ok(created) => {
                info!(id = created.id, "created restaurant pizza");
                Ok(created)
            }
            Err(ServiceError::Database(e)) => {
                warn!(error = %e, "restaurant pizza write rolled back");
                Err(ValidationError::Rejected(e).into())
            }
            Err(e) => {
                warn!(error = %e, "rejected restaurant pizza");
                Err(e)
            }
        }
    }
}

fn find_restaurant(
    conn: &mut SqliteConnection,
    restaurant_id: i32,
) -> QueryResult<Option<models::Restaurant>> {
    restaurants::table
        .find(restaurant_id)
        .select(models::Restaurant::as_select())
        .first(conn)
        .optional()
}
