//! Users Domain
//!
//! Registration, login and email verification for shop accounts.
//!
//! # Features
//!
//! - Registration with Argon2 password hashing
//! - OAuth2 password-grant login issuing stateless JWT bearer tokens
//! - Current-user lookup behind the bearer-auth middleware
//! - Email verification via signed links
//! - Post-create hook provisioning the user's business
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌──────────────────┐
//! │   Service   │ ──► │ PostCreateHook   │ ← business + verification mail
//! └──────┬──────┘     └──────────────────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum_helpers::{JwtAuth, JwtConfig};
//! use domain_users::{handlers, hooks::NoopHook, InMemoryUserRepository, UserService};
//!
//! let jwt = JwtAuth::new(&JwtConfig::new("a-development-secret-of-32-chars!!"));
//! let service = UserService::new(InMemoryUserRepository::new(), NoopHook, jwt);
//!
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod hooks;
pub mod models;
pub mod pages;
pub mod repository;
pub mod service;
pub mod sqlite;

// Re-export commonly used types
pub use error::{INVALID_VERIFICATION_TOKEN, UserError, UserResult};
pub use hooks::{BusinessProvisioning, PostCreateHook, VerificationMailer};
pub use models::{
    ProfileResponse, RegisterUser, RegistrationResponse, TokenRequest, TokenResponse, User,
};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
pub use sqlite::SqliteUserRepository;
