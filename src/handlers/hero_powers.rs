//! Hero-power route: create a strength-rated link between a hero and a power.

use crate::error::AppError;
use crate::extract::ApiJson;
use crate::models::Strength;
use crate::response::HeroPowerCreated;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

/// `POST /hero_powers` — validate, insert, and echo the link with both
/// endpoints expanded.
///
/// Checks run in a fixed order and the first failure wins: field presence,
/// strength rating, referenced rows, then pair uniqueness. Only after all
/// four pass does the insert run.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> Result<Json<HeroPowerCreated>, AppError> {
    let Some(fields) = body.as_object() else {
        return Err(AppError::MissingFields);
    };
    if !(fields.contains_key("strength")
        && fields.contains_key("power_id")
        && fields.contains_key("hero_id"))
    {
        return Err(AppError::MissingFields);
    }

    let strength = Strength::parse(fields["strength"].as_str().unwrap_or_default())?;

    let power = match fields["power_id"].as_i64() {
        Some(id) => state.store.power(id).await?,
        None => None,
    };
    let hero = match fields["hero_id"].as_i64() {
        Some(id) => state.store.hero(id).await?,
        None => None,
    };
    let (Some(power), Some(hero)) = (power, hero) else {
        return Err(AppError::UnknownId("hero or power"));
    };

    // Best-effort uniqueness: no unique index backs this probe, so two
    // concurrent creates for the same pair can both pass it.
    if state.store.find_link(hero.id, power.id).await?.is_some() {
        return Err(AppError::DuplicateLink);
    }

    let link = state.store.insert_link(strength, hero.id, power.id).await?;

    // Read both sides back after the insert so the nested link lists include
    // the row just created.
    let hero_links = state.store.links_for_hero(hero.id).await?;
    let power_links = state.store.links_for_power(power.id).await?;
    Ok(Json(HeroPowerCreated::project(
        &link,
        &hero,
        &hero_links,
        &power,
        &power_links,
    )))
}
