use crate::error::AppError;
use crate::response::{ok_many, PizzaView};
use crate::service::PizzaService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    get,
    path = "/pizzas",
    responses(
        (status = 200, description = "All pizzas", body = Vec<PizzaView>),
    ),
    tag = "pizzas"
)]
pub async fn list_pizzas(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = PizzaService::list(&state.pool).await?;
    let data: Vec<PizzaView> = rows.into_iter().map(Into::into).collect();
    Ok(ok_many(data))
}
