use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use axum_helpers::{JwtAuth, JwtClaims};
use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::hooks::PostCreateHook;
use crate::models::{RegisterUser, TokenResponse, User};
use crate::repository::UserRepository;

/// Service layer for registration, login and email verification
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    hook: Arc<dyn PostCreateHook>,
    jwt: JwtAuth,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            hook: Arc::clone(&self.hook),
            jwt: self.jwt.clone(),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R, hook: impl PostCreateHook + 'static, jwt: JwtAuth) -> Self {
        Self {
            repository: Arc::new(repository),
            hook: Arc::new(hook),
            jwt,
        }
    }

    /// Token issuer/verifier shared with the bearer-auth middleware
    pub fn jwt(&self) -> &JwtAuth {
        &self.jwt
    }

    /// Register a new user, then run the post-create hook once
    ///
    /// Duplicate usernames or emails are not pre-checked; the storage error
    /// is returned as is. If the hook fails the user row stays committed.
    pub async fn register(&self, input: RegisterUser) -> UserResult<User> {
        let password_hash = self.hash_password(&input.password)?;
        let user = User::new(input.username, input.email, password_hash);

        let created = self.repository.create(user).await?;
        self.hook.after_create(&created).await?;

        Ok(created)
    }

    /// Exchange a username/password pair for a bearer token
    pub async fn issue_token(&self, username: &str, password: &str) -> UserResult<TokenResponse> {
        let user = self
            .repository
            .get_by_username(username)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !self.verify_password(password, &user.password_hash)? {
            tracing::debug!(user_id = %user.id, "Password mismatch");
            return Err(UserError::InvalidCredentials);
        }

        let token = self
            .jwt
            .create_access_token(&user.id.to_string(), &user.username)
            .map_err(|e| UserError::Internal(format!("Failed to sign access token: {e}")))?;

        tracing::info!(user_id = %user.id, "Issued access token");
        Ok(TokenResponse::bearer(token))
    }

    /// Resolve the user a verified bearer token belongs to
    pub async fn current_user(&self, claims: &JwtClaims) -> UserResult<User> {
        let id = claims.user_id().ok_or(UserError::Unauthorized)?;

        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::Unauthorized)
    }

    /// Consume a verification token and flip the user's verified flag
    ///
    /// An already verified user is rejected like an invalid token, so a
    /// second click on the same link is a 401 and changes nothing.
    pub async fn verify_email(&self, token: &str) -> UserResult<User> {
        let claims = self.jwt.verify_token(token).map_err(|e| {
            tracing::debug!("Verification token rejected: {}", e);
            UserError::InvalidVerificationToken
        })?;
        let id = claims.user_id().ok_or(UserError::InvalidVerificationToken)?;

        let mut user = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::InvalidVerificationToken)?;

        if user.is_verified {
            return Err(UserError::InvalidVerificationToken);
        }

        if !self.repository.mark_verified(user.id).await? {
            return Err(UserError::InvalidVerificationToken);
        }
        user.is_verified = true;

        tracing::info!(user_id = %user.id, "Email verified");
        Ok(user)
    }

    // Password helpers

    fn hash_password(&self, password: &str) -> UserResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::PasswordHash(e.to_string()))
    }

    fn verify_password(&self, password: &str, hash: &str) -> UserResult<bool> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
