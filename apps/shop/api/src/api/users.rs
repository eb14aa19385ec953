use axum::Router;
use domain_business::SqliteBusinessRepository;
use domain_users::{
    BusinessProvisioning, SqliteUserRepository, UserService, VerificationMailer, handlers,
};

use crate::state::AppState;

/// Wire the users domain against SQLite, with business provisioning and
/// verification mail as the post-create hook.
pub fn router(state: &AppState) -> Router {
    let mailer = VerificationMailer::new(
        state.mail.clone(),
        state.templates.clone(),
        state.jwt.clone(),
        state.config.public_base_url.as_str(),
    );
    let hook = BusinessProvisioning::new(SqliteBusinessRepository::new(state.db.clone()), mailer);
    let service = UserService::new(
        SqliteUserRepository::new(state.db.clone()),
        hook,
        state.jwt.clone(),
    );

    handlers::router(service)
}
