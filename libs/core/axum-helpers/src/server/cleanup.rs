//! Connection cleanup used during graceful shutdown.

use tracing::{error, info};

/// Close a SeaORM connection pool, logging the outcome.
///
/// `DatabaseConnection` closes on drop as well; closing explicitly lets the
/// shutdown log show that the pool drained.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::close_database;
///
/// close_database(db, "shop").await;
/// ```
pub async fn close_database(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!("Database connection '{}' closed successfully", name),
        Err(e) => error!("Error closing database connection '{}': {}", name, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_close_database_consumes_connection() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();
        close_database(db, "mock").await;
    }
}
