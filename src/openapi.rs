//! OpenAPI document for the resource routes.

use crate::error::{ErrorBody, ErrorsBody};
use crate::handlers;
use crate::models::NewRestaurantPizza;
use crate::response::{CreatedRestaurantPizza, PizzaView, RestaurantDetail, RestaurantPizzaEntry, RestaurantSummary};
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::restaurant::list_restaurants,
        handlers::restaurant::get_restaurant,
        handlers::restaurant::delete_restaurant,
        handlers::pizza::list_pizzas,
        handlers::restaurant_pizza::create_restaurant_pizza,
    ),
    components(schemas(
        RestaurantSummary,
        RestaurantDetail,
        RestaurantPizzaEntry,
        PizzaView,
        CreatedRestaurantPizza,
        NewRestaurantPizza,
        ErrorBody,
        ErrorsBody,
    )),
    tags(
        (name = "restaurants", description = "Restaurants and their pizzas"),
        (name = "pizzas", description = "Pizza catalogue"),
        (name = "restaurant_pizzas", description = "Priced pizza offers per restaurant"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
