//! Route definitions for the `/lists` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::list;
use crate::state::AppState;

/// Routes mounted at `/api/lists`.
///
/// ```text
/// GET    /             -> list
/// POST   /             -> create
/// GET    /{id}         -> get_by_id
/// PUT    /{id}         -> update
/// DELETE /{id}         -> delete
/// GET    /{id}/tasks   -> tasks
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list).post(list::create))
        .route(
            "/{id}",
            get(list::get_by_id).put(list::update).delete(list::delete),
        )
        .route("/{id}/tasks", get(list::tasks))
}
