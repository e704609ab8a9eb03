//! Handlers for whole-dataset export and import.

use axum::extract::State;
use axum::Json;
use taskdeck_db::models::snapshot::{ImportCounts, ListSnapshot};
use taskdeck_db::repositories::SnapshotRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/export
///
/// Emits every list with its tasks nested inline; the exact shape
/// `import` accepts.
pub async fn export(State(state): State<AppState>) -> AppResult<Json<Vec<ListSnapshot>>> {
    let snapshot = SnapshotRepo::export(&state.pool).await?;
    Ok(Json(snapshot))
}

/// POST /api/import
///
/// Takes the payload as raw JSON so shape problems surface as a
/// validation outcome rather than an extractor rejection.
pub async fn import(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<Json<ImportCounts>> {
    let counts = SnapshotRepo::import(&state.pool, payload).await?;
    tracing::info!(
        lists_inserted = counts.lists_inserted,
        tasks_inserted = counts.tasks_inserted,
        "Dataset import applied"
    );
    Ok(Json(counts))
}
