//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for all domain crates:
//! - `TestDatabase`: in-memory SQLite with migrations applied
//! - `TestDataBuilder`: Deterministic usernames and emails that respect
//!   the column limits
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_sqlite_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let username = builder.username("main");
//!     let owner_id = db.insert_user(&username, &builder.email("main")).await;
//! }
//! ```

mod sqlite;

pub use sqlite::TestDatabase;

/// Builder for test data seeded from the test name
///
/// Usernames and emails derived from different seeds never collide, so tests
/// sharing a fixture can register users without tripping unique constraints.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// This is the recommended way to create a builder for consistent test data.
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_resource");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a username that fits the 20-character column limit
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert!(builder.username("alice").len() <= 20);
    /// ```
    pub fn username(&self, suffix: &str) -> String {
        let mut name = format!("{}{:x}", suffix, self.seed % 0xffff_ffff);
        name.truncate(20);
        name
    }

    /// Generate a unique email address for testing
    pub fn email(&self, suffix: &str) -> String {
        format!("{}.{}@example.com", suffix, self.seed)
    }
}
