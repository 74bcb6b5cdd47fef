use diesel::prelude::*;
use tracing::info;

use crate::db::{self, DbPool};
use crate::models::{self, NewPizza, NewRestaurant};
use crate::schema::{pizzas, restaurant_pizzas, restaurants};

const RESTAURANTS: &[NewRestaurant<'static>] = &[
    NewRestaurant {
        name: "Dough Bros",
        address: "1 Main St",
    },
    NewRestaurant {
        name: "Slice House",
        address: "9 Elm Rd",
    },
    NewRestaurant {
        name: "Crust & Co",
        address: "42 Harbour Way",
    },
];

const PIZZAS: &[NewPizza<'static>] = &[
    NewPizza {
        name: "Margherita",
        ingredients: "Tomato, Mozzarella",
    },
    NewPizza {
        name: "Funghi",
        ingredients: "Tomato, Mozzarella, Mushroom",
    },
    NewPizza {
        name: "Diavola",
        ingredients: "Tomato, Mozzarella, Spicy Salami, Chili",
    },
];

pub fn insert_restaurant(
    conn: &mut SqliteConnection,
    restaurant: &NewRestaurant<'_>,
) -> QueryResult<models::Restaurant> {
    diesel::insert_into(restaurants::table)
        .values(restaurant)
        .returning(models::Restaurant::as_returning())
        .get_result(conn)
}

pub fn insert_pizza(
    conn: &mut SqliteConnection,
    pizza: &NewPizza<'_>,
) -> QueryResult<models::Pizza> {
    diesel::insert_into(pizzas::table)
        .values(pizza)
        .returning(models::Pizza::as_returning())
        .get_result(conn)
}

/// Replaces every row with the fixed sample data set. Ids restart at 1.
pub fn seed(conn: &mut SqliteConnection) -> QueryResult<()> {
    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::delete(restaurant_pizzas::table).execute(conn)?;
        diesel::delete(restaurants::table).execute(conn)?;
        diesel::delete(pizzas::table).execute(conn)?;
        diesel::sql_query(
            "DELETE FROM sqlite_sequence WHERE name IN ('restaurants', 'pizzas', 'restaurant_pizzas')",
        )
        .execute(conn)?;

        for restaurant in RESTAURANTS {
            insert_restaurant(conn, restaurant)?;
        }
        for pizza in PIZZAS {
            insert_pizza(conn, pizza)?;
        }

        info!(
            restaurants = RESTAURANTS.len(),
            pizzas = PIZZAS.len(),
            "seeded database"
        );
        Ok(())
    })
}

/// Brings the schema up to date and seeds it on a pooled connection.
pub fn migrate_and_seed(pool: &DbPool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    db::run_migrations(pool)?;
    let mut conn = pool.get()?;
    seed(&mut conn)?;
    Ok(())
}
