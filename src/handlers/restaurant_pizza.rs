use crate::error::{AppError, ErrorsBody};
use crate::extractors::JsonBody;
use crate::models::NewRestaurantPizza;
use crate::response::{created, CreatedRestaurantPizza};
use crate::service::{RequestValidator, RestaurantPizzaService};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = NewRestaurantPizza,
    responses(
        (status = 201, description = "Association created", body = CreatedRestaurantPizza),
        (status = 400, description = "Missing fields, invalid price or store error", body = ErrorsBody),
        (status = 404, description = "Pizza or Restaurant not found", body = ErrorsBody),
    ),
    tag = "restaurant_pizzas"
)]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let new = RequestValidator::restaurant_pizza(&body)?;
    let row = RestaurantPizzaService::create(&state.pool, &new).await?;
    Ok(created(row))
}
