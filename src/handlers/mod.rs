//! HTTP handlers for restaurants, pizzas and restaurant pizzas.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
pub use pizza::*;
pub use restaurant::*;
pub use restaurant_pizza::*;

use axum::response::Html;

pub async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}
