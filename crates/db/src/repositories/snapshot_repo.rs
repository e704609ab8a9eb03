//! Whole-dataset export and idempotent import.

use std::collections::HashMap;

use taskdeck_core::error::CoreError;
use taskdeck_core::types::DbId;

use crate::error::storage;
use crate::models::list::List;
use crate::models::snapshot::{ImportCounts, ListSnapshot, TaskSnapshot};
use crate::models::task::Task;
use crate::DbPool;

/// Provides bulk transfer of the entire dataset.
pub struct SnapshotRepo;

impl SnapshotRepo {
    /// Export every list with its tasks nested inline, ordered by id.
    ///
    /// The output is the structural inverse of [`SnapshotRepo::import`]'s
    /// input: applying it to an empty store reproduces the dataset.
    pub async fn export(pool: &DbPool) -> Result<Vec<ListSnapshot>, CoreError> {
        let lists: Vec<List> =
            sqlx::query_as("SELECT id, title, description, created_date FROM lists ORDER BY id")
                .fetch_all(pool)
                .await
                .map_err(storage)?;

        let tasks: Vec<Task> = sqlx::query_as(
            "SELECT id, title, due_date, created_date, status, list_id
             FROM tasks ORDER BY id",
        )
        .fetch_all(pool)
        .await
        .map_err(storage)?;

        let mut tasks_by_list: HashMap<DbId, Vec<TaskSnapshot>> = HashMap::new();
        for task in tasks {
            tasks_by_list.entry(task.list_id).or_default().push(TaskSnapshot {
                id: task.id,
                title: task.title,
                status: task.status,
                due_date: task.due_date,
                created_date: task.created_date,
            });
        }

        Ok(lists
            .into_iter()
            .map(|list| ListSnapshot {
                id: list.id,
                title: list.title,
                description: list.description,
                created_date: list.created_date,
                tasks: tasks_by_list.remove(&list.id).unwrap_or_default(),
            })
            .collect())
    }

    /// Import a dataset snapshot, skipping rows whose id already exists.
    ///
    /// The whole payload is decoded before anything is written, so a
    /// malformed payload inserts nothing. Each list plus its tasks then
    /// commits as one transaction: a storage failure partway leaves the
    /// units committed so far in place, and re-running the same import
    /// picks up where it stopped (already-present ids are skipped).
    pub async fn import(
        pool: &DbPool,
        payload: serde_json::Value,
    ) -> Result<ImportCounts, CoreError> {
        if !payload.is_array() {
            return Err(CoreError::Validation(
                "import payload must be an array of lists".to_string(),
            ));
        }
        let snapshot: Vec<ListSnapshot> = serde_json::from_value(payload)
            .map_err(|e| CoreError::Validation(format!("malformed import payload: {e}")))?;

        let mut counts = ImportCounts {
            lists_inserted: 0,
            tasks_inserted: 0,
        };

        for entry in &snapshot {
            let mut tx = pool.begin().await.map_err(storage)?;

            let result = sqlx::query(
                "INSERT INTO lists (id, title, description, created_date)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT (id) DO NOTHING",
            )
            .bind(entry.id)
            .bind(&entry.title)
            .bind(&entry.description)
            .bind(entry.created_date)
            .execute(&mut *tx)
            .await
            .map_err(storage)?;
            counts.lists_inserted += result.rows_affected();

            for task in &entry.tasks {
                let result = sqlx::query(
                    "INSERT INTO tasks (id, title, due_date, created_date, status, list_id)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                     ON CONFLICT (id) DO NOTHING",
                )
                .bind(task.id)
                .bind(&task.title)
                .bind(task.due_date)
                .bind(task.created_date)
                .bind(task.status)
                .bind(entry.id)
                .execute(&mut *tx)
                .await
                .map_err(storage)?;
                counts.tasks_inserted += result.rows_affected();
            }

            tx.commit().await.map_err(storage)?;
        }

        Ok(counts)
    }
}
