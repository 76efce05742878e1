//! Response projections: one hand-written shape per endpoint, plus status helpers.

use crate::models::{Pizza, Restaurant, RestaurantPizza, RestaurantPizzaWithPizza};
use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// `{id, name, address}`; used by the restaurant list and as the nested restaurant of a created association.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct RestaurantSummary {
    pub id: i64,
    pub name: String,
    pub address: String,
}

impl From<Restaurant> for RestaurantSummary {
    fn from(r: Restaurant) -> Self {
        RestaurantSummary {
            id: r.id,
            name: r.name,
            address: r.address,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct PizzaView {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

impl From<Pizza> for PizzaView {
    fn from(p: Pizza) -> Self {
        PizzaView {
            id: p.id,
            name: p.name,
            ingredients: p.ingredients,
        }
    }
}

/// Association nested under a restaurant. Carries its pizza but never the owning restaurant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct RestaurantPizzaEntry {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: PizzaView,
}

impl From<RestaurantPizzaWithPizza> for RestaurantPizzaEntry {
    fn from(row: RestaurantPizzaWithPizza) -> Self {
        RestaurantPizzaEntry {
            id: row.id,
            price: row.price,
            pizza_id: row.pizza_id,
            restaurant_id: row.restaurant_id,
            pizza: PizzaView {
                id: row.pizza_id,
                name: row.pizza_name,
                ingredients: row.pizza_ingredients,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct RestaurantDetail {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaEntry>,
}

impl RestaurantDetail {
    pub fn new(restaurant: Restaurant, associations: Vec<RestaurantPizzaWithPizza>) -> Self {
        RestaurantDetail {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            restaurant_pizzas: associations.into_iter().map(Into::into).collect(),
        }
    }
}

/// Body of a successful `POST /restaurant_pizzas`, with both parents denormalized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct CreatedRestaurantPizza {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: PizzaView,
    pub restaurant: RestaurantSummary,
}

impl CreatedRestaurantPizza {
    pub fn new(row: RestaurantPizza, pizza: Pizza, restaurant: Restaurant) -> Self {
        CreatedRestaurantPizza {
            id: row.id,
            price: row.price,
            pizza_id: row.pizza_id,
            restaurant_id: row.restaurant_id,
            pizza: pizza.into(),
            restaurant: restaurant.into(),
        }
    }
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn ok_many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Vec<T>>) {
    (StatusCode::OK, Json(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}
