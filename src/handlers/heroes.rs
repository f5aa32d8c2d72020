//! Hero routes: list summaries, fetch one hero with its link records.

use crate::error::AppError;
use crate::handlers::parse_id;
use crate::response::{HeroDetail, HeroSummary};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;

/// `GET /heroes` — bare array of hero summaries, id order.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<HeroSummary>>, AppError> {
    let heroes = state.store.list_heroes().await?;
    Ok(Json(heroes.iter().map(HeroSummary::from).collect()))
}

/// `GET /heroes/{id}` — one hero with its flat hero_powers records.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HeroDetail>, AppError> {
    let id = parse_id(&id).ok_or(AppError::NotFound("Hero"))?;
    let hero = state
        .store
        .hero(id)
        .await?
        .ok_or(AppError::NotFound("Hero"))?;
    let links = state.store.links_for_hero(hero.id).await?;
    Ok(Json(HeroDetail::project(&hero, &links)))
}
