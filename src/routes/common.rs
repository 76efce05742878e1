//! Operational routes next to the pizza API: liveness, readiness and build info.
//!
//! Readiness goes one step past a connection check: the service is only ready
//! once the restaurant, pizza and join tables exist, since every resource route
//! would otherwise answer with a store error.

use crate::migration::missing_tables;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct LiveBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing_tables: Vec<&'static str>,
}

impl ReadyBody {
    fn degraded(database: &'static str, missing_tables: Vec<&'static str>) -> (StatusCode, Json<Self>) {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database,
                missing_tables,
            }),
        )
    }
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

async fn health() -> Json<LiveBody> {
    Json(LiveBody { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    match missing_tables(&state.pool).await {
        Ok(missing) if missing.is_empty() => (
            StatusCode::OK,
            Json(ReadyBody {
                status: "ok",
                database: "ok",
                missing_tables: missing,
            }),
        ),
        Ok(missing) => {
            tracing::warn!(?missing, "schema incomplete, not ready");
            ReadyBody::degraded("ok", missing)
        }
        Err(e) => {
            tracing::warn!(error = %e, "database unreachable, not ready");
            ReadyBody::degraded("unavailable", Vec::new())
        }
    }
}

async fn version() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health, GET /ready (store reachable and schema present), GET /version.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
