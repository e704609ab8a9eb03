//! Handlers for the `/api/tasks` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use taskdeck_core::types::DbId;
use taskdeck_db::models::task::{CreateTask, Task, UpdateTask};
use taskdeck_db::repositories::TaskRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/tasks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let task = TaskRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list(&state.pool).await?;
    Ok(Json(tasks))
}

/// GET /api/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::get(&state.pool, id).await?;
    Ok(Json(task))
}

/// PUT /api/tasks/{id}
///
/// Resolves the target first so an unknown id reports 404 even when the
/// body would also fail validation.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::get(&state.pool, id).await?;
    let updated = TaskRepo::update(&state.pool, task.id, &input).await?;
    Ok(Json(updated))
}

/// POST /api/tasks/{id}/complete
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::complete(&state.pool, id).await?;
    Ok(Json(task))
}

/// DELETE /api/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    TaskRepo::delete(&state.pool, id).await?;
    Ok(Json(json!({ "message": "Task deleted" })))
}
