//! Handlers for the `/api/lists` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use taskdeck_core::types::DbId;
use taskdeck_db::models::list::{CreateList, List, UpdateList};
use taskdeck_db::models::task::Task;
use taskdeck_db::repositories::{ListRepo, TaskRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/lists
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateList>,
) -> AppResult<(StatusCode, Json<List>)> {
    let list = ListRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(list)))
}

/// GET /api/lists
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<List>>> {
    let lists = ListRepo::list(&state.pool).await?;
    Ok(Json(lists))
}

/// GET /api/lists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<List>> {
    let list = ListRepo::get(&state.pool, id).await?;
    Ok(Json(list))
}

/// PUT /api/lists/{id}
///
/// Resolves the target first so an unknown id reports 404 even when the
/// body would also fail validation.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateList>,
) -> AppResult<Json<List>> {
    let list = ListRepo::get(&state.pool, id).await?;
    let updated = ListRepo::update(&state.pool, list.id, &input).await?;
    Ok(Json(updated))
}

/// DELETE /api/lists/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    ListRepo::delete(&state.pool, id).await?;
    Ok(Json(json!({ "message": "List deleted" })))
}

/// GET /api/lists/{id}/tasks
pub async fn tasks(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Task>>> {
    let list = ListRepo::get(&state.pool, id).await?;
    let tasks = TaskRepo::list_by_list(&state.pool, list.id).await?;
    Ok(Json(tasks))
}
