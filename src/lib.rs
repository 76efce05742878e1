//! Pizza API: REST backend for restaurants, pizzas and their priced associations.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::{app, common_routes_with_ready, entity_routes};
pub use seed::seed_sample_data;
pub use state::AppState;
pub use store::{connect, connect_in_memory};
