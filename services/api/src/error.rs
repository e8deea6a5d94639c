//! services/api/src/error.rs
//!
//! Defines the primary error type for the entire API service.
//!
//! Every failure reaching a handler boundary is reported as HTTP 200 with a
//! `{"error": "<message>"}` body. Clients tell success from failure by the
//! presence of the `error` key, not by status code.

use crate::config::ConfigError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use dfi_checker_core::{DurationError, PortError};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

/// The primary error type for the `api` service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from the store port.
    #[error("{0}")]
    Port(#[from] PortError),

    /// Represents an error from the underlying database library.
    #[error("Database Error: {0}")]
    Database(#[from] sqlx::Error),

    /// Represents a failure while applying the bundled schema.
    #[error("Migration Error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Represents a standard Input/Output error (e.g., binding to a network socket).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The request was rejected before anything was written.
    #[error("{0}")]
    Validation(String),

    /// The request targeted a record that does not exist.
    #[error("{0}")]
    NotFound(String),
}

impl From<DurationError> for ApiError {
    fn from(err: DurationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

/// The body returned for every failed request.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(_)
            | ApiError::NotFound(_)
            | ApiError::Port(PortError::NotFound(_)) => {}
            _ => error!("Request failed: {:?}", self),
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::OK, Json(body)).into_response()
    }
}
