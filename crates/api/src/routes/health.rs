//! Root-level health route.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// What `GET /health` reports.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` while the store answers, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health
///
/// Never errors: a store that stops answering is reported in the body,
/// not as an HTTP failure.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = taskdeck_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("Health probe could not reach the database");
    }

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mounted at the root, alongside the form routes, not under `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
