//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&DbPool` as the first argument. Inputs are validated here,
//! once, and every method returns `Result<_, CoreError>` so callers (the
//! JSON API and the form adapters alike) branch on the same outcome
//! taxonomy. No sqlx error crosses this boundary uncategorized.

pub mod list_repo;
pub mod snapshot_repo;
pub mod task_repo;

pub use list_repo::ListRepo;
pub use snapshot_repo::SnapshotRepo;
pub use task_repo::TaskRepo;
