//! Email template management with Handlebars
//!
//! `TemplateEngine` keeps a registry of named [`EmailTemplate`]s, each made of
//! a subject, an optional text body and an optional HTML body. The account
//! verification template is registered by default.

use crate::error::{NotificationError, NotificationResult};
use crate::models::Email;
use handlebars::Handlebars;
use serde::Serialize;
use std::collections::HashMap;

/// Name of the built-in account verification template.
pub const VERIFICATION_TEMPLATE: &str = "verification";

/// Rendered template result
#[derive(Debug, Clone)]
pub struct RenderedTemplate {
    pub subject: String,
    pub body_text: Option<String>,
    pub body_html: Option<String>,
}

impl RenderedTemplate {
    /// Turn the rendered parts into an email for `to`.
    pub fn into_email(self, to: impl Into<String>) -> Email {
        Email {
            body_text: self.body_text,
            body_html: self.body_html,
            ..Email::new(to, self.subject)
        }
    }
}

/// Email template definition
#[derive(Clone, Debug)]
pub struct EmailTemplate {
    pub name: String,
    pub subject: String,
    pub body_text: Option<String>,
    pub body_html: Option<String>,
}

/// Handlebars-based template engine
///
/// Supports:
/// - Variables: `{{name}}`
/// - Conditionals: `{{#if condition}}...{{/if}}`
/// - Raw (unescaped) values: `{{{link}}}`
///
/// Rendering is strict: a variable missing from the data is an error rather
/// than an empty string.
#[derive(Clone)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
    templates: HashMap<String, EmailTemplate>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("templates", &self.list_templates())
            .finish()
    }
}

impl TemplateEngine {
    /// Create a new TemplateEngine with default templates
    pub fn new() -> NotificationResult<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);

        let mut engine = Self {
            handlebars,
            templates: HashMap::new(),
        };
        engine.register_defaults()?;

        Ok(engine)
    }

    /// Register a template, replacing any template with the same name
    pub fn register(&mut self, template: EmailTemplate) -> NotificationResult<()> {
        self.handlebars
            .register_template_string(&format!("{}_subject", template.name), &template.subject)?;

        if let Some(text) = &template.body_text {
            self.handlebars
                .register_template_string(&format!("{}_text", template.name), text)?;
        }

        if let Some(html) = &template.body_html {
            self.handlebars
                .register_template_string(&format!("{}_html", template.name), html)?;
        }

        self.templates.insert(template.name.clone(), template);
        Ok(())
    }

    /// Render a template by name
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> NotificationResult<RenderedTemplate> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| NotificationError::Template(format!("Template not found: {name}")))?;

        let subject = self.handlebars.render(&format!("{name}_subject"), data)?;

        let body_text = template
            .body_text
            .as_ref()
            .map(|_| self.handlebars.render(&format!("{name}_text"), data))
            .transpose()?;

        let body_html = template
            .body_html
            .as_ref()
            .map(|_| self.handlebars.render(&format!("{name}_html"), data))
            .transpose()?;

        Ok(RenderedTemplate {
            subject,
            body_text,
            body_html,
        })
    }

    /// Check if a template exists
    pub fn has_template(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// List all registered templates
    pub fn list_templates(&self) -> Vec<&str> {
        self.templates.keys().map(|s| s.as_str()).collect()
    }

    fn register_defaults(&mut self) -> NotificationResult<()> {
        self.register(EmailTemplate {
            name: VERIFICATION_TEMPLATE.to_string(),
            subject: "{{app_name}} Account Verification Email".to_string(),
            body_text: Some(
                r#"Hi {{username}},

Thanks for choosing {{app_name}}. Please confirm your email address by opening the link below:

{{{verification_link}}}

If you did not register for {{app_name}}, please ignore this email.

The {{app_name}} Team"#
                    .to_string(),
            ),
            body_html: Some(
                r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <div style="display: flex; align-items: center; justify-content: center; flex-direction: column;">
        <h3>Account Verification</h3>
        <br>
        <p>Hi {{username}}, thanks for choosing {{app_name}}. Please click on the button below to verify your account.</p>
        <p style="text-align: center; margin: 30px 0;">
            <a href="{{{verification_link}}}"
               style="background-color: #0275d8; color: white; padding: 12px 24px; text-decoration: none; border-radius: 6px; display: inline-block;">
                Verify your email
            </a>
        </p>
        <p style="color: #666; font-size: 14px;">If you did not register for {{app_name}}, please kindly ignore this email and nothing will happen.</p>
    </div>
</body>
</html>"#
                    .to_string(),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn verification_data() -> serde_json::Value {
        json!({
            "app_name": "EasyShop",
            "username": "ada",
            "verification_link": "http://localhost:8000/verification?token=a.b&c",
        })
    }

    #[test]
    fn test_template_engine_creation() {
        let engine = TemplateEngine::new().unwrap();
        assert!(engine.has_template(VERIFICATION_TEMPLATE));
        assert_eq!(engine.list_templates(), vec![VERIFICATION_TEMPLATE]);
    }

    #[test]
    fn test_verification_rendering() {
        let engine = TemplateEngine::new().unwrap();

        let rendered = engine
            .render(VERIFICATION_TEMPLATE, &verification_data())
            .unwrap();

        assert_eq!(rendered.subject, "EasyShop Account Verification Email");
        let html = rendered.body_html.unwrap();
        assert!(html.contains("Hi ada"));
        // the link is emitted raw, not HTML-escaped
        assert!(html.contains("href=\"http://localhost:8000/verification?token=a.b&c\""));
        assert!(rendered.body_text.unwrap().contains("token=a.b&c"));
    }

    #[test]
    fn test_missing_variable_is_an_error() {
        let engine = TemplateEngine::new().unwrap();

        let err = engine
            .render(VERIFICATION_TEMPLATE, &json!({ "app_name": "EasyShop" }))
            .unwrap_err();
        assert!(matches!(err, NotificationError::Template(_)));
    }

    #[test]
    fn test_unknown_template() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine.render("welcome", &json!({})).unwrap_err();
        assert!(err.to_string().contains("Template not found: welcome"));
    }

    #[test]
    fn test_custom_template() {
        let mut engine = TemplateEngine::new().unwrap();

        engine
            .register(EmailTemplate {
                name: "custom".to_string(),
                subject: "Custom: {{title}}".to_string(),
                body_text: Some("{{content}}".to_string()),
                body_html: None,
            })
            .unwrap();

        let rendered = engine
            .render("custom", &json!({ "title": "Test", "content": "Hello World" }))
            .unwrap();
        assert_eq!(rendered.subject, "Custom: Test");
        assert_eq!(rendered.body_text.as_deref(), Some("Hello World"));
        assert!(rendered.body_html.is_none());

        let email = rendered.into_email("ada@example.com");
        assert_eq!(email.to, "ada@example.com");
        assert_eq!(email.subject, "Custom: Test");
    }
}
