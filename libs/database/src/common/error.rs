/// Database error type for connection-level operations.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Errors raised by SeaORM / sqlx
    #[error("SQLite error: {0}")]
    Orm(#[from] sea_orm::DbErr),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
