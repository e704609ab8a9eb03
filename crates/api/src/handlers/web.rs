//! Form-encoded web handlers.
//!
//! Thin adapters over the same repositories as the JSON API: decode the
//! form, run the operation, and send the browser back to the listing view
//! with a 303. Failures carry the outcome message in a `notice` query
//! parameter instead of a JSON error body; rendering is the frontend's
//! concern.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Form;
use serde::Deserialize;
use taskdeck_core::error::CoreError;
use taskdeck_core::types::DbId;
use taskdeck_db::models::list::{CreateList, UpdateList};
use taskdeck_db::models::task::{CreateTask, UpdateTask};
use taskdeck_db::repositories::{ListRepo, TaskRepo};

use crate::state::AppState;

/// Listing view every form operation lands back on.
const LISTS_VIEW: &str = "/lists";

/// Form fields for creating or editing a list.
#[derive(Debug, Deserialize)]
pub struct ListForm {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Form fields for creating a task.
#[derive(Debug, Deserialize)]
pub struct NewTaskForm {
    pub title: Option<String>,
    pub due_date: Option<String>,
    pub list_id: Option<DbId>,
}

/// Form fields for editing a task.
#[derive(Debug, Deserialize)]
pub struct EditTaskForm {
    pub title: Option<String>,
    pub due_date: Option<String>,
}

/// 303 back to the listing view, carrying `notice` for the UI to flash.
fn see_other(notice: &str) -> Redirect {
    Redirect::to(&format!(
        "{LISTS_VIEW}?notice={}",
        urlencoding::encode(notice)
    ))
}

/// Map an operation outcome to the redirect the browser should follow.
///
/// Storage details never leak into the notice.
fn finish<T>(result: Result<T, CoreError>, success: &str) -> Redirect {
    match result {
        Ok(_) => see_other(success),
        Err(CoreError::Storage(_)) => see_other("Something went wrong, please try again"),
        Err(err) => see_other(&err.to_string()),
    }
}

/// POST /lists/add
pub async fn add_list(State(state): State<AppState>, Form(form): Form<ListForm>) -> Redirect {
    let input = CreateList {
        title: form.title,
        description: form.description,
    };
    finish(ListRepo::create(&state.pool, &input).await, "List created")
}

/// POST /lists/{id}/edit
pub async fn edit_list(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(form): Form<ListForm>,
) -> Redirect {
    let input = UpdateList {
        title: form.title,
        description: form.description,
    };
    finish(ListRepo::update(&state.pool, id, &input).await, "List updated")
}

/// POST /lists/{id}/delete
pub async fn delete_list(State(state): State<AppState>, Path(id): Path<DbId>) -> Redirect {
    finish(ListRepo::delete(&state.pool, id).await, "List deleted")
}

/// POST /tasks/add
pub async fn add_task(State(state): State<AppState>, Form(form): Form<NewTaskForm>) -> Redirect {
    let input = CreateTask {
        title: form.title,
        due_date: form.due_date,
        list_id: form.list_id,
    };
    finish(TaskRepo::create(&state.pool, &input).await, "Task created")
}

/// POST /tasks/{id}/edit
pub async fn edit_task(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(form): Form<EditTaskForm>,
) -> Redirect {
    let input = UpdateTask {
        title: form.title,
        due_date: form.due_date,
    };
    finish(TaskRepo::update(&state.pool, id, &input).await, "Task updated")
}

/// POST /tasks/{id}/complete
pub async fn complete_task(State(state): State<AppState>, Path(id): Path<DbId>) -> Redirect {
    finish(TaskRepo::complete(&state.pool, id).await, "Task completed")
}

/// POST /tasks/{id}/delete
pub async fn delete_task(State(state): State<AppState>, Path(id): Path<DbId>) -> Redirect {
    finish(TaskRepo::delete(&state.pool, id).await, "Task deleted")
}
