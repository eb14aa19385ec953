use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum BusinessError {
    #[error("No business for owner {0}")]
    NotFound(Uuid),

    /// Storage failure, including constraint violations (one business per owner).
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type BusinessResult<T> = Result<T, BusinessError>;

/// Convert BusinessError to AppError for standardized error responses
impl From<BusinessError> for AppError {
    fn from(err: BusinessError) -> Self {
        match err {
            BusinessError::NotFound(owner_id) => {
                AppError::NotFound(format!("No business for owner {owner_id}"))
            }
            BusinessError::Database(e) => AppError::Database(e),
        }
    }
}
