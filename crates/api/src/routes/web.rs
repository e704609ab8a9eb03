//! Route definitions for the form-encoded web surface.
//!
//! Mounted at the root, next to `/health`, not under `/api`: these paths
//! are browser form targets, and every one of them answers with a 303
//! back to the listing view.

use axum::routing::post;
use axum::Router;

use crate::handlers::web;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// POST /lists/add             -> add_list
/// POST /lists/{id}/edit       -> edit_list
/// POST /lists/{id}/delete     -> delete_list
/// POST /tasks/add             -> add_task
/// POST /tasks/{id}/edit       -> edit_task
/// POST /tasks/{id}/complete   -> complete_task
/// POST /tasks/{id}/delete     -> delete_task
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/lists/add", post(web::add_list))
        .route("/lists/{id}/edit", post(web::edit_list))
        .route("/lists/{id}/delete", post(web::delete_list))
        .route("/tasks/add", post(web::add_task))
        .route("/tasks/{id}/edit", post(web::edit_task))
        .route("/tasks/{id}/complete", post(web::complete_task))
        .route("/tasks/{id}/delete", post(web::delete_task))
}
