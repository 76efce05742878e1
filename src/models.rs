//! Row types for the `restaurants`, `pizzas` and `restaurant_pizzas` tables.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct RestaurantPizza {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

/// A restaurant's association joined with its pizza columns.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct RestaurantPizzaWithPizza {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza_name: String,
    pub pizza_ingredients: String,
}

/// Validated input for `POST /restaurant_pizzas`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewRestaurantPizza {
    /// Whole number between 1 and 30.
    #[schema(minimum = 1, maximum = 30)]
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

/// Price bounds for a restaurant's pizza, inclusive.
pub const MIN_PRICE: i64 = 1;
pub const MAX_PRICE: i64 = 30;
