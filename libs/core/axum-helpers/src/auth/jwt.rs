use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,      // Subject (user ID)
    pub username: String, // Username at issue time
    pub exp: i64,         // Expiration time
    pub iat: i64,         // Issued at
    pub jti: String,      // JWT ID
}

impl JwtClaims {
    /// Parse the subject back into a user id.
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

/// Stateless HS256 token issuer and verifier.
///
/// Login tokens and email verification tokens share the same claims and
/// signing key; only their lifetime differs.
#[derive(Clone)]
pub struct JwtAuth {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
    access_token_ttl: i64,
    verification_token_ttl: i64,
}

impl std::fmt::Debug for JwtAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtAuth")
            .field("access_token_ttl", &self.access_token_ttl)
            .field("verification_token_ttl", &self.verification_token_ttl)
            .finish_non_exhaustive()
    }
}

impl JwtAuth {
    /// Create a new JWT auth instance.
    ///
    /// # Example
    /// ```ignore
    /// use axum_helpers::{JwtAuth, JwtConfig};
    /// use core_config::FromEnv;
    ///
    /// let config = JwtConfig::from_env()?;
    /// let jwt_auth = JwtAuth::new(&config);
    /// ```
    pub fn new(config: &JwtConfig) -> Self {
        let secret = config.secret.as_bytes();
        tracing::info!(
            access_token_ttl = config.access_token_ttl,
            verification_token_ttl = config.verification_token_ttl,
            "JWT auth initialized"
        );
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret)),
            decoding: Arc::new(DecodingKey::from_secret(secret)),
            access_token_ttl: config.access_token_ttl,
            verification_token_ttl: config.verification_token_ttl,
        }
    }

    /// Lifetime of login tokens, in seconds.
    pub fn access_token_ttl(&self) -> i64 {
        self.access_token_ttl
    }

    /// Create a login token
    pub fn create_access_token(&self, user_id: &str, username: &str) -> eyre::Result<String> {
        self.create_token(user_id, username, self.access_token_ttl)
    }

    /// Create an email verification token
    pub fn create_verification_token(
        &self,
        user_id: &str,
        username: &str,
    ) -> eyre::Result<String> {
        self.create_token(user_id, username, self.verification_token_ttl)
    }

    /// Create JWT token with specified TTL
    fn create_token(&self, user_id: &str, username: &str, ttl_seconds: i64) -> eyre::Result<String> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: user_id.to_string(),
            username: username.to_string(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        Ok(token)
    }

    /// Verify JWT token signature and expiry, and decode claims
    pub fn verify_token(&self, token: &str) -> eyre::Result<JwtClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        let token_data = decode::<JwtClaims>(token, &self.decoding, &validation)?;
        Ok(token_data.claims)
    }
}
