//! SMTP email provider using lettre

use super::{EmailProvider, SendResult};
use crate::error::{NotificationError, NotificationResult};
use crate::models::Email;
use async_trait::async_trait;
use core_config::{ConfigError, Environment, FromEnv, env_or_default, env_parse_or};
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart, SinglePart, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use std::sync::Arc;

/// SMTP provider configuration
#[derive(Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_email: String,
    pub from_name: String,
    pub use_tls: bool,
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .field("from_email", &self.from_email)
            .field("from_name", &self.from_name)
            .field("use_tls", &self.use_tls)
            .finish()
    }
}

impl SmtpConfig {
    /// Local Mailhog/Mailpit at localhost:1025, no auth, no TLS.
    pub fn mailhog() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 1025,
            username: String::new(),
            password: String::new(),
            from_email: "noreply@easyshop.local".to_string(),
            from_name: "EasyShop".to_string(),
            use_tls: false,
        }
    }
}

impl FromEnv for SmtpConfig {
    /// Reads `SMTP_HOST`, `SMTP_PORT`, `SMTP_USERNAME`, `SMTP_PASSWORD`,
    /// `SMTP_USE_TLS`, `EMAIL_FROM_ADDRESS` and `EMAIL_FROM_NAME`.
    ///
    /// Without `SMTP_HOST`, development falls back to [`SmtpConfig::mailhog`];
    /// production requires it.
    fn from_env() -> Result<Self, ConfigError> {
        let dev = SmtpConfig::mailhog();

        let Ok(host) = std::env::var("SMTP_HOST") else {
            if Environment::from_env().is_production() {
                return Err(ConfigError::MissingEnvVar("SMTP_HOST".to_string()));
            }
            tracing::info!("SMTP_HOST not set, using local Mailhog at localhost:1025");
            return Ok(Self {
                from_email: env_or_default("EMAIL_FROM_ADDRESS", &dev.from_email),
                from_name: env_or_default("EMAIL_FROM_NAME", &dev.from_name),
                ..dev
            });
        };

        Ok(Self {
            host,
            port: env_parse_or("SMTP_PORT", 587)?,
            username: env_or_default("SMTP_USERNAME", ""),
            password: env_or_default("SMTP_PASSWORD", ""),
            from_email: env_or_default("EMAIL_FROM_ADDRESS", &dev.from_email),
            from_name: env_or_default("EMAIL_FROM_NAME", &dev.from_name),
            use_tls: env_parse_or("SMTP_USE_TLS", true)?,
        })
    }
}

fn parse_mailbox(address: &str) -> NotificationResult<Mailbox> {
    address
        .parse()
        .map_err(|e: lettre::address::AddressError| NotificationError::InvalidAddress {
            address: address.to_string(),
            details: e.to_string(),
        })
}

/// SMTP email provider
pub struct SmtpProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    config: Arc<SmtpConfig>,
}

impl SmtpProvider {
    /// Create a new SMTP provider
    pub fn new(config: SmtpConfig) -> NotificationResult<Self> {
        let credentials = (!config.username.is_empty())
            .then(|| Credentials::new(config.username.clone(), config.password.clone()));

        let builder = if config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                .map_err(|e| NotificationError::Config(format!("Failed to create SMTP relay: {e}")))?
        } else {
            // Plain connection, e.g. Mailpit/Mailhog
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
        };

        let builder = builder.port(config.port);
        let transport = match credentials {
            Some(creds) => builder.credentials(creds).build(),
            None => builder.build(),
        };

        tracing::info!(
            host = %config.host,
            port = config.port,
            tls = config.use_tls,
            "SMTP provider configured"
        );

        Ok(Self {
            transport,
            config: Arc::new(config),
        })
    }

    fn build_message(&self, email: &Email) -> NotificationResult<Message> {
        let from = Mailbox::new(
            Some(self.config.from_name.clone()),
            parse_mailbox(&self.config.from_email)?.email,
        );
        let to = parse_mailbox(&email.to)?;

        let builder = Message::builder().from(from).to(to).subject(&email.subject);

        let built = match (&email.body_text, &email.body_html) {
            (Some(text), Some(html)) => builder.multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html.clone()),
                    ),
            ),
            (Some(text), None) => builder.header(ContentType::TEXT_PLAIN).body(text.clone()),
            (None, Some(html)) => builder.header(ContentType::TEXT_HTML).body(html.clone()),
            (None, None) => return Err(NotificationError::MissingBody),
        };

        built.map_err(|e| NotificationError::Provider(format!("Failed to build message: {e}")))
    }
}

#[async_trait]
impl EmailProvider for SmtpProvider {
    async fn send(&self, email: &Email) -> NotificationResult<SendResult> {
        let message = self.build_message(email)?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| NotificationError::Provider(format!("Failed to send email via SMTP: {e}")))?;

        let message_id = response
            .message()
            .next()
            .map(|s| s.to_string())
            .unwrap_or_else(|| email.id.clone());

        tracing::info!(
            email_id = %email.id,
            to = %email.to,
            subject = %email.subject,
            "Email sent successfully"
        );

        Ok(SendResult { message_id })
    }

    async fn health_check(&self) -> NotificationResult<()> {
        self.transport
            .test_connection()
            .await
            .map_err(|e| NotificationError::Provider(format!("SMTP health check failed: {e}")))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "smtp"
    }
}
