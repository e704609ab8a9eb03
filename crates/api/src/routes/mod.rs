pub mod health;
pub mod lists;
pub mod tasks;
pub mod transfer;
pub mod web;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /lists                  list, create
/// /lists/{id}             get, update, delete
/// /lists/{id}/tasks       tasks belonging to one list
///
/// /tasks                  list, create
/// /tasks/{id}             get, update, delete
/// /tasks/{id}/complete    mark complete (POST)
///
/// /export                 full dataset snapshot (GET)
/// /import                 idempotent snapshot import (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/lists", lists::router())
        .nest("/tasks", tasks::router())
        // Bulk transfer endpoints live at the /api root.
        .merge(transfer::router())
}
