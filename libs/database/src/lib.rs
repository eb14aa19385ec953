//! Database library providing the SQLite connector used by the shop services
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::sqlite::{self, SqliteConfig};
//! use migration::Migrator;
//!
//! let config = SqliteConfig::from_env()?;
//! let db = sqlite::connect_from_config_with_retry(config, None).await?;
//! sqlite::run_migrations::<Migrator>(&db, "shop_api").await?;
//! ```

pub mod common;
pub mod sqlite;

pub use common::{DatabaseError, DatabaseResult};
