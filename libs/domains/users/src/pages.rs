//! Server-rendered HTML pages.

use handlebars::Handlebars;
use serde_json::json;

use crate::error::{UserError, UserResult};
use crate::hooks::APP_NAME;

const VERIFIED_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{app_name}} - Account Verified</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <div style="display: flex; align-items: center; justify-content: center; flex-direction: column; margin-top: 10%;">
        <h3>Account Verification</h3>
        <p>Hi {{username}}, your account has been verified. You can now log in to {{app_name}}.</p>
    </div>
</body>
</html>"#;

/// Confirmation page shown after a successful email verification.
///
/// `username` is HTML-escaped.
pub fn render_verified(username: &str) -> UserResult<String> {
    Handlebars::new()
        .render_template(VERIFIED_PAGE, &json!({ "app_name": APP_NAME, "username": username }))
        .map_err(|e| UserError::Internal(format!("Failed to render verification page: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greets_user() {
        let html = render_verified("alice").unwrap();
        assert!(html.contains("Hi alice, your account has been verified."));
        assert!(html.contains("<title>EasyShop - Account Verified</title>"));
    }

    #[test]
    fn test_escapes_username() {
        let html = render_verified("<script>").unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("Hi <script>"));
    }
}
