//! Whole-dataset transfer DTOs for bulk export and import.

use serde::{Deserialize, Serialize};
use taskdeck_core::types::{CalendarDate, DbId};

/// One list element of a dataset snapshot, tasks nested inline.
///
/// Export produces this shape and import consumes it, ids included, so a
/// snapshot can be re-applied idempotently (existing ids are skipped).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSnapshot {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub created_date: CalendarDate,
    #[serde(default)]
    pub tasks: Vec<TaskSnapshot>,
}

/// One task element nested under a list snapshot. The owning list is
/// given by the nesting, so there is no `list_id` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSnapshot {
    pub id: DbId,
    pub title: String,
    pub status: bool,
    pub due_date: CalendarDate,
    pub created_date: CalendarDate,
}

/// How many rows an import actually inserted. Skipped rows (ids that
/// already existed) are not counted.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ImportCounts {
    pub lists_inserted: u64,
    pub tasks_inserted: u64,
}
