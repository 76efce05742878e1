//! Queries and writes per entity. Every write runs in a single transaction.

mod pizza;
mod restaurant;
mod restaurant_pizza;
mod validation;
pub use pizza::PizzaService;
pub use restaurant::RestaurantService;
pub use restaurant_pizza::RestaurantPizzaService;
pub use validation::RequestValidator;
