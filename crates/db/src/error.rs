//! Classification of storage failures into the outcome taxonomy.

use taskdeck_core::error::CoreError;

/// Convert a sqlx error at the repository boundary.
///
/// Foreign-key violations mean the caller referenced a row that does not
/// exist, so they classify as `Validation`. Everything else is a
/// `Storage` failure and is logged here, once, with its source.
pub(crate) fn storage(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.kind() == sqlx::error::ErrorKind::ForeignKeyViolation {
            return CoreError::Validation("referenced row does not exist".to_string());
        }
    }
    tracing::error!(error = %err, "Database error");
    CoreError::Storage(err.to_string())
}
