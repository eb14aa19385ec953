use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Format of `joined_date` in profile responses, e.g. `Jan 05 2024`.
pub const JOINED_DATE_FORMAT: &str = "%b %d %Y";

/// User entity - matches SQL schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,
    /// Login name (unique, at most 20 characters)
    pub username: String,
    /// Email address (unique)
    pub email: String,
    /// Argon2 password hash (never exposed in API responses)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Whether the email address has been confirmed
    pub is_verified: bool,
    pub join_date: DateTime<Utc>,
}

impl User {
    /// Create a new, unverified user (password must already be hashed)
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            username,
            email,
            password_hash,
            is_verified: false,
            join_date: Utc::now(),
        }
    }
}

/// DTO for user registration
///
/// Unknown fields in the body are ignored.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterUser {
    #[validate(length(min = 1, max = 20))]
    #[schema(example = "alice", max_length = 20)]
    pub username: String,
    #[validate(email, length(max = 200))]
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// OAuth2 password-grant form for `POST /token`
///
/// Only `username` and `password` are used; the remaining OAuth2 fields are
/// accepted and ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
    pub grant_type: Option<String>,
    #[serde(default)]
    pub scope: String,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

/// Bearer token issued by `POST /token`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always `bearer`
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Public view of the current user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub username: String,
    pub email: String,
    pub verified: bool,
    #[schema(example = "Jan 05 2024")]
    pub joined_date: String,
}

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            verified: user.is_verified,
            joined_date: user.join_date.format(JOINED_DATE_FORMAT).to_string(),
        }
    }
}

/// `{"status": "ok", "data": "..."}` body of `POST /registration`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResponse {
    #[schema(example = "ok")]
    pub status: String,
    pub data: String,
}

impl RegistrationResponse {
    pub fn for_user(user: &User) -> Self {
        Self {
            status: "ok".to_string(),
            data: format!(
                "Hello {}, thanks for choosing our services. Please check your email in box and click on the link to confirm your registration.",
                user.username
            ),
        }
    }
}

/// `{"status": "ok", "data": {...}}` body of `POST /user/me`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileEnvelope {
    #[schema(example = "ok")]
    pub status: String,
    pub data: ProfileResponse,
}

impl From<&User> for ProfileEnvelope {
    fn from(user: &User) -> Self {
        Self {
            status: "ok".to_string(),
            data: user.into(),
        }
    }
}

/// Query string of the verification link
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct VerificationQuery {
    /// Signed verification token from the email
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn user() -> User {
        User {
            join_date: Utc.with_ymd_and_hms(2024, 1, 5, 12, 30, 0).unwrap(),
            ..User::new(
                "alice".to_string(),
                "alice@example.com".to_string(),
                "$argon2id$v=19$...".to_string(),
            )
        }
    }

    #[test]
    fn test_new_user_is_unverified() {
        assert!(!user().is_verified);
    }

    #[test]
    fn test_password_hash_is_never_serialized() {
        let json = serde_json::to_value(user()).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "alice");
    }

    #[test]
    fn test_profile_formats_joined_date() {
        let profile = ProfileResponse::from(&user());
        assert_eq!(profile.joined_date, "Jan 05 2024");
        assert!(!profile.verified);
    }

    #[test]
    fn test_registration_message() {
        let response = RegistrationResponse::for_user(&user());
        assert_eq!(response.status, "ok");
        assert!(response.data.starts_with("Hello alice, thanks for choosing our services."));
    }

    #[test]
    fn test_register_validation() {
        let valid = RegisterUser {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(valid.validate().is_ok());

        let too_long = RegisterUser {
            username: "a".repeat(21),
            ..valid.clone()
        };
        assert!(too_long.validate().is_err());

        let bad_email = RegisterUser {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        let errors = bad_email.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));

        let empty_password = RegisterUser {
            password: String::new(),
            ..valid
        };
        assert!(empty_password.validate().is_err());
    }

    #[test]
    fn test_token_request_ignores_oauth_extras() {
        let form: TokenRequest = serde_json::from_value(serde_json::json!({
            "username": "alice",
            "password": "secret",
            "grant_type": "password",
        }))
        .unwrap();
        assert_eq!(form.username, "alice");
        assert!(form.scope.is_empty());
        assert!(form.client_id.is_none());
    }
}
