//! SQLite test infrastructure
//!
//! Provides a `TestDatabase` helper backed by a private in-memory SQLite
//! database with the workspace migrations applied.

use database::sqlite::{SqliteConfig, connect_from_config, run_migrations};
use migration::Migrator;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use uuid::Uuid;

/// Test database wrapper
///
/// Each instance owns its own in-memory database; it disappears when the
/// last clone of the connection is dropped.
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// Create a new test database with migrations applied
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// let conn = db.connection();
    /// # }
    /// ```
    pub async fn new() -> Self {
        let connection = connect_from_config(SqliteConfig::in_memory())
            .await
            .expect("Failed to open in-memory SQLite database");

        run_migrations::<Migrator>(&connection, "test")
            .await
            .expect("Failed to run migrations on test database");

        tracing::debug!("Test database ready (in-memory SQLite)");

        Self { connection }
    }

    /// Get a clone of the connection
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Insert a bare user row and return its id.
    ///
    /// For tests of tables that reference `users` without going through the
    /// users domain.
    pub async fn insert_user(&self, username: &str, email: &str) -> Uuid {
        let id = Uuid::now_v7();
        self.connection
            .execute_raw(Statement::from_sql_and_values(
                self.connection.get_database_backend(),
                "INSERT INTO users (id, username, email, password) VALUES (?, ?, ?, ?)",
                [
                    id.into(),
                    username.into(),
                    email.into(),
                    "not-a-real-hash".into(),
                ],
            ))
            .await
            .expect("Failed to insert test user");
        id
    }

    /// Count rows in `table`.
    pub async fn count(&self, table: &str) -> i64 {
        let row = self
            .connection
            .query_one_raw(Statement::from_string(
                self.connection.get_database_backend(),
                format!("SELECT COUNT(*) AS n FROM {table}"),
            ))
            .await
            .expect("Failed to count rows")
            .expect("COUNT(*) returned no row");
        row.try_get("", "n").expect("Failed to read row count")
    }
}
