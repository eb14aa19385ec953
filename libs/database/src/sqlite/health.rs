use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::debug;

use crate::common::DatabaseError;

/// Run `SELECT 1` against the pool.
///
/// # Example
/// ```ignore
/// database::sqlite::check_health(&db).await?;
/// ```
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    debug!("Running SQLite health check");

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1".to_owned());
    db.query_one_raw(stmt).await.map_err(|e| {
        DatabaseError::HealthCheckFailed(format!("SQLite health check failed: {}", e))
    })?;

    debug!("SQLite health check passed");
    Ok(())
}

/// Outcome of a timed health check.
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,
    pub message: Option<String>,
    pub response_time_ms: u64,
}

impl HealthStatus {
    pub fn healthy(response_time_ms: u64) -> Self {
        Self {
            healthy: true,
            message: None,
            response_time_ms,
        }
    }

    pub fn unhealthy(message: String, response_time_ms: u64) -> Self {
        Self {
            healthy: false,
            message: Some(message),
            response_time_ms,
        }
    }
}

/// Health check with response time, never fails.
pub async fn check_health_detailed(db: &DatabaseConnection) -> HealthStatus {
    let start = std::time::Instant::now();
    let result = check_health(db).await;
    let elapsed = start.elapsed().as_millis() as u64;

    match result {
        Ok(_) => HealthStatus::healthy(elapsed),
        Err(e) => HealthStatus::unhealthy(e.to_string(), elapsed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::{SqliteConfig, connect_from_config};

    #[tokio::test]
    async fn test_check_health_in_memory() {
        let db = connect_from_config(SqliteConfig::in_memory()).await.unwrap();
        assert!(check_health(&db).await.is_ok());

        let status = check_health_detailed(&db).await;
        assert!(status.healthy);
        assert!(status.message.is_none());
    }

    #[tokio::test]
    async fn test_check_health_after_close_fails() {
        let db = connect_from_config(SqliteConfig::in_memory()).await.unwrap();
        let handle = db.clone();
        db.close().await.unwrap();

        let status = check_health_detailed(&handle).await;
        assert!(!status.healthy);
        assert!(status.message.unwrap().contains("health check failed"));
    }

    #[test]
    fn test_health_status_constructors() {
        let status = HealthStatus::unhealthy("connection failed".to_string(), 100);
        assert!(!status.healthy);
        assert_eq!(status.response_time_ms, 100);
        assert_eq!(status.message.as_deref(), Some("connection failed"));
        assert!(HealthStatus::healthy(3).healthy);
    }
}
