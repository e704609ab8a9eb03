//! Sample data for first runs against an empty store.

use chrono::Days;
use taskdeck_core::error::CoreError;
use taskdeck_core::types::today;

use crate::error::storage;
use crate::models::list::CreateList;
use crate::models::task::CreateTask;
use crate::repositories::{ListRepo, TaskRepo};
use crate::DbPool;

/// Insert a small sample dataset if the store holds no lists at all.
///
/// Purely additive and guarded by the emptiness check, so restarting the
/// service never duplicates or overwrites anything. Returns `true` if
/// the seed ran.
pub async fn seed_if_empty(pool: &DbPool) -> Result<bool, CoreError> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM lists")
        .fetch_one(pool)
        .await
        .map_err(storage)?;
    if count > 0 {
        return Ok(false);
    }

    let groceries = ListRepo::create(
        pool,
        &CreateList {
            title: Some("Groceries".to_string()),
            description: Some("Weekly shopping run".to_string()),
        },
    )
    .await?;
    for title in ["Buy milk", "Buy coffee beans"] {
        TaskRepo::create(
            pool,
            &CreateTask {
                title: Some(title.to_string()),
                due_date: Some(due_in(2)),
                list_id: Some(groceries.id),
            },
        )
        .await?;
    }

    let chores = ListRepo::create(
        pool,
        &CreateList {
            title: Some("Chores".to_string()),
            description: Some("Around the house".to_string()),
        },
    )
    .await?;
    TaskRepo::create(
        pool,
        &CreateTask {
            title: Some("Water the plants".to_string()),
            due_date: Some(due_in(1)),
            list_id: Some(chores.id),
        },
    )
    .await?;
    TaskRepo::create(
        pool,
        &CreateTask {
            title: Some("Take out the recycling".to_string()),
            due_date: Some(due_in(4)),
            list_id: Some(chores.id),
        },
    )
    .await?;

    tracing::info!("Seeded sample lists and tasks into empty store");
    Ok(true)
}

/// `YYYY-MM-DD` string for a due date `days` from today.
fn due_in(days: u64) -> String {
    (today() + Days::new(days)).to_string()
}
