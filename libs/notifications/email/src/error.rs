//! Error types for email delivery.

use thiserror::Error;

/// Result type for notification operations.
pub type NotificationResult<T> = Result<T, NotificationError>;

/// Errors that can occur while building, rendering or sending an email.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// Provider could not be configured
    #[error("Configuration error: {0}")]
    Config(String),

    /// A sender or recipient address did not parse
    #[error("Invalid address '{address}': {details}")]
    InvalidAddress { address: String, details: String },

    /// The message had neither a text nor an HTML body
    #[error("Email must have either a text or an HTML body")]
    MissingBody,

    /// Template registration or rendering failed
    #[error("Template error: {0}")]
    Template(String),

    /// Transport-level failure (SMTP, ...)
    #[error("Provider error: {0}")]
    Provider(String),
}

impl From<handlebars::RenderError> for NotificationError {
    fn from(err: handlebars::RenderError) -> Self {
        Self::Template(err.to_string())
    }
}

impl From<handlebars::TemplateError> for NotificationError {
    fn from(err: handlebars::TemplateError) -> Self {
        Self::Template(err.to_string())
    }
}
