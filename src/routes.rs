//! Route table and the small operational endpoints.

use crate::handlers::{hero_powers, heroes, powers};
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::limit::RequestBodyLimitLayer;

/// Upper bound on request bodies. The write payloads here are a few short
/// fields, so anything near this limit is not a legitimate request.
const BODY_LIMIT: usize = 64 * 1024;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

/// `GET /` — static landing text.
async fn index() -> Html<&'static str> {
    Html("<h1>Superheroes API</h1>")
}

/// `GET /health` — process liveness, no dependencies touched.
async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

/// `GET /ready` — liveness plus a database round trip.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadyBody {
                status: "ok",
                database: "ok",
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyBody {
                    status: "degraded",
                    database: "unavailable",
                }),
            )
        }
    }
}

/// Assemble the full application router over shared state.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/heroes", get(heroes::list))
        .route("/heroes/:id", get(heroes::get))
        .route("/powers", get(powers::list))
        .route("/powers/:id", get(powers::get).patch(powers::update))
        .route("/hero_powers", post(hero_powers::create))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
        .with_state(state)
}
