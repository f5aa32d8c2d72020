//! Power routes: list, fetch one, and patch the description.

use crate::error::AppError;
use crate::extract::ApiJson;
use crate::handlers::parse_id;
use crate::response::PowerBody;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

/// `GET /powers` — bare array of powers, id order.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PowerBody>>, AppError> {
    let powers = state.store.list_powers().await?;
    Ok(Json(powers.iter().map(PowerBody::from).collect()))
}

/// `GET /powers/{id}` — one power, no link records.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PowerBody>, AppError> {
    let id = parse_id(&id).ok_or(AppError::NotFound("Power"))?;
    let power = state
        .store
        .power(id)
        .await?
        .ok_or(AppError::NotFound("Power"))?;
    Ok(Json(PowerBody::from(&power)))
}

/// `PATCH /powers/{id}` — update the description, nothing else.
///
/// Existence is checked before the body is inspected, so an unknown id is a
/// 404 even when the body is unusable. A body without a `description` key is
/// rejected outright; a non-string value falls through to the length rule.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<Value>,
) -> Result<Json<PowerBody>, AppError> {
    let id = parse_id(&id).ok_or(AppError::NotFound("Power"))?;
    let power = state
        .store
        .power(id)
        .await?
        .ok_or(AppError::NotFound("Power"))?;
    let description = match body.get("description") {
        None => return Err(AppError::NoValidData),
        Some(value) => value.as_str().unwrap_or_default(),
    };
    let updated = state
        .store
        .update_power_description(power.id, description)
        .await?
        .ok_or(AppError::NotFound("Power"))?;
    Ok(Json(PowerBody::from(&updated)))
}
