//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskdeck_core::types::{CalendarDate, DbId};

/// A row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub due_date: CalendarDate,
    pub created_date: CalendarDate,
    pub status: bool,
    pub list_id: DbId,
}

/// DTO for creating a new task. All three fields are required.
///
/// `due_date` stays textual here; the repository parses it so a malformed
/// date is a validation outcome, not a decode rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTask {
    pub title: Option<String>,
    pub due_date: Option<String>,
    pub list_id: Option<DbId>,
}

/// DTO for updating a task. At least one field must be provided.
///
/// `status` is deliberately absent: completion has its own operation and
/// updates never touch it. `list_id` is likewise fixed at creation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub due_date: Option<String>,
}
