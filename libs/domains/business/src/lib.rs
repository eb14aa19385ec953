//! Business Domain
//!
//! Every user owns exactly one business. It is created by the users domain
//! right after the user row is committed and is never created or deleted
//! through any other path, so this crate has no HTTP surface of its own.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_business::{BusinessRepository, CreateBusiness, SqliteBusinessRepository};
//! # async fn example(db: sea_orm::DatabaseConnection, owner_id: uuid::Uuid) {
//! let repository = SqliteBusinessRepository::new(db);
//! let business = repository
//!     .create(CreateBusiness::for_owner(owner_id, "alice"))
//!     .await
//!     .unwrap();
//! assert_eq!(business.business_name, "alice");
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod models;
pub mod repository;
pub mod sqlite;

pub use error::{BusinessError, BusinessResult};
pub use models::{Business, CreateBusiness, DEFAULT_LOCATION, DEFAULT_LOGO};
pub use repository::{BusinessRepository, InMemoryBusinessRepository};
pub use sqlite::SqliteBusinessRepository;
