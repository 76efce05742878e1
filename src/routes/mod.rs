//! Router assembly.

mod common;
mod entity;
pub use common::common_routes_with_ready;
pub use entity::entity_routes;

use crate::openapi::openapi_json;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::trace::TraceLayer;

/// Upper bound on request bodies; the only body accepted is a three-field object.
/// Oversized bodies are rejected by the JSON extractor, so they get the usual
/// `{"errors": [...]}` answer.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Full application: resource routes, common routes and the OpenAPI document.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(entity_routes(state.clone()))
        .merge(common_routes_with_ready(state))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
