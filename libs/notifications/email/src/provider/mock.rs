//! Mock email provider for testing

use super::{EmailProvider, SendResult};
use crate::error::{NotificationError, NotificationResult};
use crate::models::Email;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-process provider that records every accepted email.
///
/// Clones share the same outbox, so a test can hand one clone to the code
/// under test and inspect the other.
#[derive(Clone, Default)]
pub struct MockSmtpProvider {
    outbox: Arc<Mutex<Vec<Email>>>,
    /// When set, every send and health check fails with this message
    failure: Option<String>,
}

impl MockSmtpProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider whose sends always fail, as an unreachable SMTP relay would
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    pub async fn sent_emails(&self) -> Vec<Email> {
        self.outbox.lock().await.clone()
    }

    pub async fn sent_count(&self) -> usize {
        self.outbox.lock().await.len()
    }

    pub async fn clear(&self) {
        self.outbox.lock().await.clear();
    }

    /// Most recently sent email, if any
    pub async fn last_sent(&self) -> Option<Email> {
        self.outbox.lock().await.last().cloned()
    }

    pub async fn was_sent_to(&self, address: &str) -> bool {
        self.outbox.lock().await.iter().any(|e| e.to == address)
    }
}

#[async_trait]
impl EmailProvider for MockSmtpProvider {
    async fn send(&self, email: &Email) -> NotificationResult<SendResult> {
        if let Some(message) = &self.failure {
            return Err(NotificationError::Provider(message.clone()));
        }
        if !email.has_body() {
            return Err(NotificationError::MissingBody);
        }

        self.outbox.lock().await.push(email.clone());
        Ok(SendResult {
            message_id: format!("mock-{}", email.id),
        })
    }

    async fn health_check(&self) -> NotificationResult<()> {
        match &self.failure {
            Some(message) => Err(NotificationError::Provider(message.clone())),
            None => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_sends_email() {
        let provider = MockSmtpProvider::new();

        let email = Email::new("test@example.com", "Test Subject").with_text("Test body");

        let result = provider.send(&email).await.unwrap();
        assert_eq!(result.message_id, format!("mock-{}", email.id));

        let sent = provider.sent_emails().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "test@example.com");
    }

    #[tokio::test]
    async fn test_mock_provider_fails() {
        let provider = MockSmtpProvider::failing("Simulated failure");

        let email = Email::new("test@example.com", "Test Subject").with_text("Test body");

        let result = provider.send(&email).await;
        assert!(result.unwrap_err().to_string().contains("Simulated failure"));
        assert_eq!(provider.sent_count().await, 0);
        assert!(provider.health_check().await.is_err());
    }

    #[tokio::test]
    async fn test_mock_provider_rejects_empty_email() {
        let provider = MockSmtpProvider::new();

        let result = provider.send(&Email::new("test@example.com", "Empty")).await;
        assert!(matches!(result, Err(NotificationError::MissingBody)));
    }

    #[tokio::test]
    async fn test_clones_share_outbox() {
        let provider = MockSmtpProvider::new();
        let handle = provider.clone();

        let email = Email::new("user@example.com", "Test").with_text("Body");
        handle.send(&email).await.unwrap();

        assert_eq!(provider.sent_count().await, 1);
        assert_eq!(provider.last_sent().await.unwrap().id, email.id);
    }

    #[tokio::test]
    async fn test_mock_provider_was_sent_to() {
        let provider = MockSmtpProvider::new();

        let email = Email::new("user@example.com", "Test").with_text("Body");
        provider.send(&email).await.unwrap();

        assert!(provider.was_sent_to("user@example.com").await);
        assert!(!provider.was_sent_to("other@example.com").await);
    }
}
