//! Repository for the `tasks` table.

use taskdeck_core::error::CoreError;
use taskdeck_core::types::{today, DbId};
use taskdeck_core::validate::{optional_date, optional_text, parse_date, required_text};

use crate::error::storage;
use crate::models::task::{CreateTask, Task, UpdateTask};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, due_date, created_date, status, list_id";

/// Provides CRUD, completion, and per-list queries for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// `title`, `due_date` (`YYYY-MM-DD`), and `list_id` are all required,
    /// and `list_id` must reference an existing list. New tasks start
    /// incomplete; `created_date` is stamped with today's date.
    pub async fn create(pool: &DbPool, input: &CreateTask) -> Result<Task, CoreError> {
        let title = required_text("title", input.title.as_deref())?;
        let due_date = match input.due_date.as_deref() {
            Some(raw) => parse_date("due_date", raw)?,
            None => return Err(CoreError::Validation("due_date is required".to_string())),
        };
        let list_id = input
            .list_id
            .ok_or_else(|| CoreError::Validation("list_id is required".to_string()))?;
        if !list_exists(pool, list_id).await? {
            return Err(CoreError::Validation(format!(
                "list_id {list_id} does not reference an existing list"
            )));
        }
        let query = format!(
            "INSERT INTO tasks (title, due_date, created_date, status, list_id)
             VALUES (?1, ?2, ?3, 0, ?4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&title)
            .bind(due_date)
            .bind(today())
            .bind(list_id)
            .fetch_one(pool)
            .await
            .map_err(storage)
    }

    /// Fetch a task by id.
    pub async fn get(pool: &DbPool, id: DbId) -> Result<Task, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = ?1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(storage)?
            .ok_or(CoreError::NotFound { entity: "Task", id })
    }

    /// All tasks across every list, ordered by id.
    pub async fn list(pool: &DbPool) -> Result<Vec<Task>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY id");
        sqlx::query_as::<_, Task>(&query)
            .fetch_all(pool)
            .await
            .map_err(storage)
    }

    /// Tasks belonging to one list, ordered by id. Callers are expected
    /// to have resolved the list first; an unknown `list_id` yields an
    /// empty vector here.
    pub async fn list_by_list(pool: &DbPool, list_id: DbId) -> Result<Vec<Task>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE list_id = ?1 ORDER BY id");
        sqlx::query_as::<_, Task>(&query)
            .bind(list_id)
            .fetch_all(pool)
            .await
            .map_err(storage)
    }

    /// Update a task. Only provided fields are applied; provided fields
    /// must be valid, and at least one must be present. `status` and
    /// `list_id` never change here.
    pub async fn update(pool: &DbPool, id: DbId, input: &UpdateTask) -> Result<Task, CoreError> {
        if input.title.is_none() && input.due_date.is_none() {
            return Err(CoreError::Validation(
                "nothing to update: provide title and/or due_date".to_string(),
            ));
        }
        let title = optional_text("title", input.title.as_deref())?;
        let due_date = optional_date("due_date", input.due_date.as_deref())?;
        let query = format!(
            "UPDATE tasks SET
                title = COALESCE(?2, title),
                due_date = COALESCE(?3, due_date)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(title)
            .bind(due_date)
            .fetch_optional(pool)
            .await
            .map_err(storage)?
            .ok_or(CoreError::NotFound { entity: "Task", id })
    }

    /// Mark a task complete. Idempotent: completing an already-complete
    /// task succeeds and leaves `status` true. There is no inverse.
    pub async fn complete(pool: &DbPool, id: DbId) -> Result<Task, CoreError> {
        let query = format!("UPDATE tasks SET status = 1 WHERE id = ?1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(storage)?
            .ok_or(CoreError::NotFound { entity: "Task", id })
    }

    /// Delete a task by id.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(storage)?;
        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound { entity: "Task", id });
        }
        Ok(())
    }
}

/// True if a list row with this id exists.
async fn list_exists(pool: &DbPool, list_id: DbId) -> Result<bool, CoreError> {
    let row: Option<(DbId,)> = sqlx::query_as("SELECT id FROM lists WHERE id = ?1")
        .bind(list_id)
        .fetch_optional(pool)
        .await
        .map_err(storage)?;
    Ok(row.is_some())
}
