//! Application state management.
//!
//! Shared state handed to the domain routers when the app is assembled:
//! configuration, the SQLite pool, the token issuer and the outgoing mail
//! provider.

use axum_helpers::JwtAuth;
use database::sqlite::DatabaseConnection;
use email::{EmailProvider, TemplateEngine};
use std::sync::Arc;

/// Shared application state.
///
/// Cloning is cheap: the connection pool, provider and template registry
/// are all reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// SQLite connection pool
    pub db: DatabaseConnection,
    /// Issues and verifies bearer and verification tokens
    pub jwt: JwtAuth,
    /// Outgoing mail (SMTP in production, a capturing mock in tests)
    pub mail: Arc<dyn EmailProvider>,
    pub templates: TemplateEngine,
}
