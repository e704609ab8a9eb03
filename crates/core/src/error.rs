use crate::types::DbId;

/// Outcome classification for every repository operation.
///
/// `NotFound` and `Validation` are expected request outcomes; `Storage`
/// means the backing store failed. No sqlx error crosses the repository
/// boundary uncategorized.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}
