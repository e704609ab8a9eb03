//! Repository for the `lists` table.

use taskdeck_core::error::CoreError;
use taskdeck_core::types::{today, DbId};
use taskdeck_core::validate::{optional_text, required_text};

use crate::error::storage;
use crate::models::list::{CreateList, List, UpdateList};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, created_date";

/// Provides CRUD operations for lists.
pub struct ListRepo;

impl ListRepo {
    /// Insert a new list, returning the created row.
    ///
    /// `title` and `description` must both be present and non-empty;
    /// `created_date` is stamped with today's date.
    pub async fn create(pool: &DbPool, input: &CreateList) -> Result<List, CoreError> {
        let title = required_text("title", input.title.as_deref())?;
        let description = required_text("description", input.description.as_deref())?;
        let query = format!(
            "INSERT INTO lists (title, description, created_date)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, List>(&query)
            .bind(&title)
            .bind(&description)
            .bind(today())
            .fetch_one(pool)
            .await
            .map_err(storage)
    }

    /// Fetch a list by id.
    pub async fn get(pool: &DbPool, id: DbId) -> Result<List, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM lists WHERE id = ?1");
        sqlx::query_as::<_, List>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(storage)?
            .ok_or(CoreError::NotFound { entity: "List", id })
    }

    /// All lists, ordered by id.
    pub async fn list(pool: &DbPool) -> Result<Vec<List>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM lists ORDER BY id");
        sqlx::query_as::<_, List>(&query)
            .fetch_all(pool)
            .await
            .map_err(storage)
    }

    /// Update a list. Only provided fields are applied; provided fields
    /// must be non-empty, and at least one must be present.
    pub async fn update(pool: &DbPool, id: DbId, input: &UpdateList) -> Result<List, CoreError> {
        if input.title.is_none() && input.description.is_none() {
            return Err(CoreError::Validation(
                "nothing to update: provide title and/or description".to_string(),
            ));
        }
        let title = optional_text("title", input.title.as_deref())?;
        let description = optional_text("description", input.description.as_deref())?;
        let query = format!(
            "UPDATE lists SET
                title = COALESCE(?2, title),
                description = COALESCE(?3, description)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, List>(&query)
            .bind(id)
            .bind(title)
            .bind(description)
            .fetch_optional(pool)
            .await
            .map_err(storage)?
            .ok_or(CoreError::NotFound { entity: "List", id })
    }

    /// Delete a list by id. Its tasks go with it (cascade).
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM lists WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(storage)?;
        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound { entity: "List", id });
        }
        Ok(())
    }
}
