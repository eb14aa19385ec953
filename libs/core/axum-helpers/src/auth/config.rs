//! JWT configuration loaded through `core_config::FromEnv`.

use core_config::{ConfigError, FromEnv, env_parse_or, env_required};

/// Default lifetime of a login token, in seconds.
pub const DEFAULT_ACCESS_TOKEN_TTL: i64 = 3600;
/// Default lifetime of an email verification token, in seconds.
pub const DEFAULT_VERIFICATION_TOKEN_TTL: i64 = 86_400;

/// JWT authentication configuration.
///
/// Loaded from environment variables:
/// - `JWT_SECRET` (required) - Must be at least 32 characters
/// - `JWT_ACCESS_TOKEN_TTL` (optional, seconds) - defaults to 3600
/// - `JWT_VERIFICATION_TOKEN_TTL` (optional, seconds) - defaults to 86400
///
/// # Example
///
/// ```ignore
/// use axum_helpers::JwtConfig;
/// use core_config::FromEnv;
///
/// let config = JwtConfig::from_env()?;
///
/// // Manual construction (for testing)
/// let config = JwtConfig::new("my-super-secret-key-that-is-at-least-32-chars");
/// ```
#[derive(Clone)]
pub struct JwtConfig {
    /// JWT signing secret (minimum 32 characters)
    pub secret: String,
    pub access_token_ttl: i64,
    pub verification_token_ttl: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[redacted]")
            .field("access_token_ttl", &self.access_token_ttl)
            .field("verification_token_ttl", &self.verification_token_ttl)
            .finish()
    }
}

impl JwtConfig {
    /// Create a new JwtConfig with the given secret and default lifetimes.
    ///
    /// # Panics
    /// Panics if the secret is less than 32 characters.
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        assert!(
            secret.len() >= 32,
            "JWT secret must be at least 32 characters"
        );
        Self {
            secret,
            access_token_ttl: DEFAULT_ACCESS_TOKEN_TTL,
            verification_token_ttl: DEFAULT_VERIFICATION_TOKEN_TTL,
        }
    }

    pub fn with_access_token_ttl(mut self, seconds: i64) -> Self {
        self.access_token_ttl = seconds;
        self
    }

    pub fn with_verification_token_ttl(mut self, seconds: i64) -> Self {
        self.verification_token_ttl = seconds;
        self
    }
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;

        if secret.len() < 32 {
            return Err(ConfigError::ParseError {
                key: "JWT_SECRET".to_string(),
                details: format!(
                    "must be at least 32 characters for security (got {}). Generate one with: openssl rand -base64 32",
                    secret.len()
                ),
            });
        }

        let access_token_ttl = env_parse_or("JWT_ACCESS_TOKEN_TTL", DEFAULT_ACCESS_TOKEN_TTL)?;
        let verification_token_ttl =
            env_parse_or("JWT_VERIFICATION_TOKEN_TTL", DEFAULT_VERIFICATION_TOKEN_TTL)?;

        for (key, ttl) in [
            ("JWT_ACCESS_TOKEN_TTL", access_token_ttl),
            ("JWT_VERIFICATION_TOKEN_TTL", verification_token_ttl),
        ] {
            if ttl <= 0 {
                return Err(ConfigError::ParseError {
                    key: key.to_string(),
                    details: format!("must be a positive number of seconds (got {ttl})"),
                });
            }
        }

        Ok(Self {
            secret,
            access_token_ttl,
            verification_token_ttl,
        })
    }
}
