use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, auth::INVALID_CREDENTIALS};
use domain_business::BusinessError;
use email::NotificationError;
use sea_orm::DbErr;
use thiserror::Error;

/// Message of the 401 returned by the verification link.
pub const INVALID_VERIFICATION_TOKEN: &str = "Invalid token or expired token";

#[derive(Debug, Error)]
pub enum UserError {
    /// Unknown username or wrong password at login
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Bearer token valid but its user no longer resolves
    #[error("Unauthorized")]
    Unauthorized,

    /// Bad, expired or already-used verification token
    #[error("Invalid or expired verification token")]
    InvalidVerificationToken,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    /// Includes unique violations on username/email
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error(transparent)]
    Business(#[from] BusinessError),

    #[error("Email error: {0}")]
    Email(#[from] NotificationError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidCredentials => {
                AppError::Unauthorized("Invalid username or password".to_string())
            }
            UserError::Unauthorized => AppError::Unauthorized(INVALID_CREDENTIALS.to_string()),
            UserError::InvalidVerificationToken => {
                AppError::Unauthorized(INVALID_VERIFICATION_TOKEN.to_string())
            }
            UserError::Database(e) => AppError::Database(e),
            UserError::Business(e) => e.into(),
            UserError::PasswordHash(msg) => {
                tracing::error!("Password hash error: {}", msg);
                AppError::InternalServerError("An internal error occurred".to_string())
            }
            UserError::Email(e) => {
                tracing::error!("Email error: {}", e);
                AppError::InternalServerError("An internal error occurred".to_string())
            }
            UserError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                AppError::InternalServerError("An internal error occurred".to_string())
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
