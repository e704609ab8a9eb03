//! List entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskdeck_core::types::{CalendarDate, DbId};

/// A row from the `lists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct List {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub created_date: CalendarDate,
}

/// DTO for creating a new list. Both fields are required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateList {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// DTO for updating a list. At least one field must be provided.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateList {
    pub title: Option<String>,
    pub description: Option<String>,
}
