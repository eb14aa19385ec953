//! Side effects of user creation.
//!
//! After a user row is committed the service runs its [`PostCreateHook`]
//! exactly once. The production hook, [`BusinessProvisioning`], creates the
//! user's business and mails a verification link.

use async_trait::async_trait;
use axum_helpers::JwtAuth;
use domain_business::{BusinessRepository, CreateBusiness};
use email::{EmailProvider, TemplateEngine, VERIFICATION_TEMPLATE};
use serde::Serialize;
use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Product name used in outgoing mail.
pub const APP_NAME: &str = "EasyShop";

/// Runs after a new user row has been committed.
#[async_trait]
pub trait PostCreateHook: Send + Sync {
    async fn after_create(&self, user: &User) -> UserResult<()>;
}

/// Hook that does nothing, for wiring the service without side effects.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHook;

#[async_trait]
impl PostCreateHook for NoopHook {
    async fn after_create(&self, _user: &User) -> UserResult<()> {
        Ok(())
    }
}

#[derive(Serialize)]
struct VerificationEmailData<'a> {
    app_name: &'a str,
    username: &'a str,
    verification_link: String,
}

/// Renders and sends the account verification email.
#[derive(Clone)]
pub struct VerificationMailer {
    provider: Arc<dyn EmailProvider>,
    templates: Arc<TemplateEngine>,
    jwt: JwtAuth,
    base_url: String,
}

impl VerificationMailer {
    /// `base_url` is the public origin the link points at, e.g. `http://localhost:8000`.
    pub fn new(
        provider: Arc<dyn EmailProvider>,
        templates: TemplateEngine,
        jwt: JwtAuth,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            templates: Arc::new(templates),
            jwt,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Link embedding a freshly signed verification token for `user`.
    pub fn verification_link(&self, user: &User) -> UserResult<String> {
        let token = self
            .jwt
            .create_verification_token(&user.id.to_string(), &user.username)
            .map_err(|e| UserError::Internal(format!("Failed to sign verification token: {e}")))?;
        Ok(format!("{}/verification?token={}", self.base_url, token))
    }

    /// Send the verification email for `user` to every address in `recipients`.
    ///
    /// Stops at the first delivery failure.
    pub async fn send(&self, recipients: &[String], user: &User) -> UserResult<()> {
        let data = VerificationEmailData {
            app_name: APP_NAME,
            username: &user.username,
            verification_link: self.verification_link(user)?,
        };
        let rendered = self.templates.render(VERIFICATION_TEMPLATE, &data)?;

        for to in recipients {
            let email = rendered.clone().into_email(to.as_str());
            let result = self.provider.send(&email).await?;
            tracing::debug!(
                user_id = %user.id,
                provider = self.provider.name(),
                message_id = %result.message_id,
                "Verification email sent"
            );
        }
        Ok(())
    }
}

/// Creates the user's business, then mails the verification link.
///
/// A failed business insert propagates; a failed email is only logged.
pub struct BusinessProvisioning<B: BusinessRepository> {
    businesses: B,
    mailer: VerificationMailer,
}

impl<B: BusinessRepository> BusinessProvisioning<B> {
    pub fn new(businesses: B, mailer: VerificationMailer) -> Self {
        Self { businesses, mailer }
    }
}

#[async_trait]
impl<B: BusinessRepository> PostCreateHook for BusinessProvisioning<B> {
    async fn after_create(&self, user: &User) -> UserResult<()> {
        let business = self
            .businesses
            .create(CreateBusiness::for_owner(user.id, user.username.clone()))
            .await?;
        tracing::info!(
            user_id = %user.id,
            business_id = %business.id,
            "Provisioned business for new user"
        );

        if let Err(e) = self.mailer.send(&[user.email.clone()], user).await {
            tracing::warn!(
                user_id = %user.id,
                email = %user.email,
                error = %e,
                "Failed to send verification email"
            );
        }
        Ok(())
    }
}
