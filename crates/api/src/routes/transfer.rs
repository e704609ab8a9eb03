//! Route definitions for whole-dataset export and import.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::transfer;
use crate::state::AppState;

/// Routes merged into the `/api` root.
///
/// ```text
/// GET  /export   -> export
/// POST /import   -> import
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/export", get(transfer::export))
        .route("/import", post(transfer::import))
}
