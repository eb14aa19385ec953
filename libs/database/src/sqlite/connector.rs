use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::SqliteConfig;
use crate::common::{RetryConfig, retry, retry_with_backoff};

/// Connect to a SQLite database using default pool settings.
///
/// # Example
/// ```ignore
/// let db = database::sqlite::connect("sqlite://database.sqlite3?mode=rwc").await?;
/// ```
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    connect_from_config(SqliteConfig::new(database_url)).await
}

/// Connect using a [`SqliteConfig`].
pub async fn connect_from_config(config: SqliteConfig) -> Result<DatabaseConnection, DbErr> {
    connect_with_options(config.into_connect_options()).await
}

/// Connect with fully custom SeaORM options.
pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!("Successfully connected to SQLite database");
    Ok(db)
}

/// Connect with retry and exponential backoff.
///
/// Uses `RetryConfig::default()` (3 retries) when `retry_config` is `None`.
///
/// # Example
/// ```ignore
/// use database::{common::RetryConfig, sqlite};
///
/// let db = sqlite::connect_from_config_with_retry(
///     config,
///     Some(RetryConfig::new().with_max_retries(5)),
/// ).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: SqliteConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    let options = config.into_connect_options();
    let attempt = || connect_with_options(options.clone());

    match retry_config {
        Some(retry_config) => retry_with_backoff(attempt, retry_config).await,
        None => retry(attempt).await,
    }
}

/// Apply all pending migrations of `M`.
///
/// # Example
/// ```ignore
/// use migration::Migrator;
///
/// database::sqlite::run_migrations::<Migrator>(&db, "shop_api").await?;
/// ```
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!("Running {} database migrations...", app_name);
    M::up(db, None).await?;
    info!("Migrations completed successfully for {}", app_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, DatabaseBackend};

    #[tokio::test]
    async fn test_connect_in_memory() {
        let db = connect_from_config(SqliteConfig::in_memory()).await.unwrap();
        assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);
    }

    #[tokio::test]
    async fn test_connect_with_retry_in_memory() {
        let db = connect_from_config_with_retry(
            SqliteConfig::in_memory(),
            Some(RetryConfig::new().with_max_retries(1).without_jitter()),
        )
        .await;
        assert!(db.is_ok());
    }

    #[tokio::test]
    async fn test_connect_reports_unreachable_file() {
        let config = SqliteConfig::new("sqlite:///nonexistent-dir/shop.db?mode=ro");
        let result = connect_from_config_with_retry(
            config,
            Some(
                RetryConfig::new()
                    .with_max_retries(1)
                    .with_initial_delay(1)
                    .without_jitter(),
            ),
        )
        .await;
        assert!(result.is_err());
    }
}
