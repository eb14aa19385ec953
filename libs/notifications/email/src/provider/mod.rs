//! Email provider implementations

pub mod mock;
pub mod smtp;

pub use mock::MockSmtpProvider;
pub use smtp::{SmtpConfig, SmtpProvider};

use crate::error::NotificationResult;
use crate::models::Email;
use async_trait::async_trait;

/// Result of sending an email
#[derive(Debug)]
pub struct SendResult {
    /// Provider-specific message ID
    pub message_id: String,
}

/// Trait for email providers
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Send an email
    async fn send(&self, email: &Email) -> NotificationResult<SendResult>;

    /// Check if the provider is reachable
    async fn health_check(&self) -> NotificationResult<()>;

    /// Get provider name
    fn name(&self) -> &'static str;
}
