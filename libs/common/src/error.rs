//! Custom error types for the common library
//!
//! This module defines the store error taxonomy shared by every service.
//! Callers above the store layer decide how these surface to clients.

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Custom error type for database operations
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error occurred while opening or acquiring a connection
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// Error occurred during database query execution
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// Error occurred during database migration
    #[error("Database migration error: {0}")]
    Migration(String),

    /// Configuration error
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

impl DatabaseError {
    /// Whether the failed statement violated a unique constraint
    pub fn is_unique_violation(&self) -> bool {
        match self {
            DatabaseError::Query(SqlxError::Database(db_error)) => db_error.is_unique_violation(),
            _ => false,
        }
    }
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_is_not_a_unique_violation() {
        let error = DatabaseError::Query(SqlxError::RowNotFound);
        assert!(!error.is_unique_violation());
    }

    #[test]
    fn configuration_error_message_includes_detail() {
        let error = DatabaseError::Configuration("DATABASE_URL not set".to_string());
        assert_eq!(
            error.to_string(),
            "Database configuration error: DATABASE_URL not set"
        );
    }
}
