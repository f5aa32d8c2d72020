//! Typed errors and HTTP mapping.

use crate::models::ValidationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Everything a handler can fail with. The [`IntoResponse`] impl is the single
/// place wire bodies are produced: expected failures surface as JSON with an
/// `error` or `errors` key, and 5xx bodies never carry internal detail.
#[derive(Error, Debug)]
pub enum AppError {
    /// Entity looked up by primary key is absent. Holds the entity name as it
    /// appears in the response body ("Hero", "Power").
    #[error("{0} not found")]
    NotFound(&'static str),
    /// A store-level field rule rejected the value.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// Link creation referenced a hero or power id with no row behind it.
    #[error("unknown {0} id in request")]
    UnknownId(&'static str),
    /// Link creation body lacked one of its three required keys.
    #[error("missing strength, power_id, or hero_id")]
    MissingFields,
    /// The (hero_id, power_id) pair is already linked.
    #[error("hero power already exists")]
    DuplicateLink,
    /// Update body carried no usable field.
    #[error("no valid data provided")]
    NoValidData,
    /// The link insert's unit of work failed and was rolled back.
    #[error("database commit failed: {0}")]
    CommitFailed(#[source] sqlx::Error),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("{entity} not found") }),
            ),
            AppError::Invalid(_) | AppError::UnknownId(_) => (
                StatusCode::BAD_REQUEST,
                json!({ "errors": ["validation errors"] }),
            ),
            AppError::MissingFields => (
                StatusCode::BAD_REQUEST,
                json!({ "errors": ["Missing strength, power_id, or hero_id"] }),
            ),
            AppError::DuplicateLink => (
                StatusCode::BAD_REQUEST,
                json!({ "errors": ["Hero power already exists"] }),
            ),
            AppError::NoValidData => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "No valid data provided" }),
            ),
            AppError::CommitFailed(e) => {
                tracing::error!(error = %e, "link insert rolled back");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "errors": ["Database commit failed"] }),
                )
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "errors": ["Internal Server Error"] }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
