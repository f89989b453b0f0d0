//! Error types for the persistence layer.

use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Failure in the persistence layer.
///
/// Covers connection, query, and migration failures. Callers at the service
/// boundary are expected to log the error and surface a generic failure;
/// the message is for diagnostics, not for clients.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A query or connection failed.
    #[error("database error: {0}")]
    Database(String),

    /// Schema migration failed.
    #[error("migration failed: {0}")]
    Migration(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::Migration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_error_display() {
        let err = StoreError::Database("connection refused".to_string());
        assert_eq!(err.to_string(), "database error: connection refused");
    }

    #[test]
    fn migration_error_display() {
        let err = StoreError::Migration("checksum mismatch".to_string());
        assert_eq!(err.to_string(), "migration failed: checksum mismatch");
    }
}
