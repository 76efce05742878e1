//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Lookup by path id found nothing. Carries the entity name, e.g. "Restaurant".
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Missing required fields")]
    MissingFields,
    #[error("validation errors")]
    Validation,
    #[error("Pizza or Restaurant not found")]
    MissingReference,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Db(#[from] sqlx::Error),
}

/// Body for lookups by path id: `{"error": "..."}`.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Body for write failures: `{"errors": ["..."]}`.
#[derive(Serialize, ToSchema)]
pub struct ErrorsBody {
    pub errors: Vec<String>,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::MissingReference => StatusCode::NOT_FOUND,
            AppError::MissingFields
            | AppError::Validation
            | AppError::BadRequest(_)
            | AppError::Db(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        tracing::warn!(status = %status, error = %message, "request failed");
        match self {
            AppError::NotFound(_) => (status, Json(ErrorBody { error: message })).into_response(),
            _ => (status, Json(ErrorsBody { errors: vec![message] })).into_response(),
        }
    }
}
