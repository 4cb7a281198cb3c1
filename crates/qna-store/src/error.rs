//! Error types for the store layer

use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations
///
/// Absence of a row is not an error at this layer: lookups return
/// `Option`, mutations return affected-row counts, and the caller
/// decides what a miss means.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A write violated a relational constraint (e.g. an answer
    /// referencing a question that does not exist)
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// Database error (when the postgres feature is enabled)
    #[cfg(feature = "postgres")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
