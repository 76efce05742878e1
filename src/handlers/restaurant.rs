//! Restaurant handlers: list, read with associations, delete with associations.

use crate::error::{AppError, ErrorBody};
use crate::response::{ok, ok_many, RestaurantDetail, RestaurantSummary};
use crate::service::RestaurantService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

const ENTITY: &str = "Restaurant";

/// A path id that is not an integer names no row.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str.parse().map_err(|_| AppError::NotFound(ENTITY))
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "All restaurants", body = Vec<RestaurantSummary>),
    ),
    tag = "restaurants"
)]
pub async fn list_restaurants(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = RestaurantService::list(&state.pool).await?;
    let data: Vec<RestaurantSummary> = rows.into_iter().map(Into::into).collect();
    Ok(ok_many(data))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    params(("id" = i64, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Restaurant with its pizzas", body = RestaurantDetail),
        (status = 404, description = "Restaurant not found", body = ErrorBody),
    ),
    tag = "restaurants"
)]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let detail = RestaurantService::detail(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound(ENTITY))?;
    Ok(ok(detail))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    params(("id" = i64, Path, description = "Restaurant id")),
    responses(
        (status = 204, description = "Restaurant and its pizza associations deleted"),
        (status = 404, description = "Restaurant not found", body = ErrorBody),
    ),
    tag = "restaurants"
)]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if !RestaurantService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(ENTITY));
    }
    Ok(StatusCode::NO_CONTENT)
}
