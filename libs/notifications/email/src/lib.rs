//! Email delivery for the shop services
//!
//! ## Components
//!
//! - **Email Models**: [`Email`] message with text and/or HTML bodies
//! - **Providers**: [`SmtpProvider`] (lettre) and [`MockSmtpProvider`] behind
//!   the [`EmailProvider`] trait
//! - **Templates**: Handlebars-based [`TemplateEngine`]
//!
//! ## Usage
//!
//! ```ignore
//! use core_config::FromEnv;
//! use email::{EmailProvider, SmtpConfig, SmtpProvider, TemplateEngine, VERIFICATION_TEMPLATE};
//!
//! let provider = SmtpProvider::new(SmtpConfig::from_env()?)?;
//! let templates = TemplateEngine::new()?;
//!
//! let email = templates
//!     .render(VERIFICATION_TEMPLATE, &data)?
//!     .into_email("ada@example.com");
//! provider.send(&email).await?;
//! ```

pub mod error;
pub mod models;
pub mod provider;
pub mod templates;

pub use error::{NotificationError, NotificationResult};
pub use models::Email;
pub use provider::{EmailProvider, MockSmtpProvider, SendResult, SmtpConfig, SmtpProvider};
pub use templates::{EmailTemplate, RenderedTemplate, TemplateEngine, VERIFICATION_TEMPLATE};
