use super::jwt::JwtAuth;
use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

/// Message returned for every bearer-token failure.
pub const INVALID_CREDENTIALS: &str = "Could not validate credentials";

/// Extract JWT from the `Authorization: Bearer <token>` header.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| {
            let (scheme, token) = auth.split_once(' ')?;
            scheme.eq_ignore_ascii_case("bearer").then(|| token.trim())
        })
        .filter(|token| !token.is_empty())
}

/// JWT authentication middleware
///
/// Validates the bearer token signature and expiry and inserts [`super::JwtClaims`]
/// into request extensions. Any failure becomes a single 401.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::post};
/// use axum_helpers::{JwtAuth, jwt_auth_middleware};
///
/// let protected_routes = Router::new()
///     .route("/user/me", post(me_handler))
///     .route_layer(axum::middleware::from_fn_with_state(
///         jwt_auth.clone(),
///         jwt_auth_middleware,
///     ));
/// ```
pub async fn jwt_auth_middleware(
    State(auth): State<JwtAuth>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = extract_bearer_token(&headers) else {
        tracing::debug!("No bearer token in Authorization header");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    };

    let claims = auth.verify_token(token).map_err(|e| {
        tracing::debug!("JWT verification failed: {}", e);
        AppError::Unauthorized(INVALID_CREDENTIALS.to_string())
    })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{JwtClaims, JwtConfig};
    use axum::{Extension, Router, body::Body, http::StatusCode, middleware, routing::post};
    use tower::ServiceExt;

    fn auth() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new("middleware-test-secret-long-enough!!"))
    }

    fn app(auth: JwtAuth) -> Router {
        Router::new()
            .route(
                "/me",
                post(|Extension(claims): Extension<JwtClaims>| async move { claims.username }),
            )
            .route_layer(middleware::from_fn_with_state(auth, jwt_auth_middleware))
    }

    fn request(authorization: Option<&str>) -> Request {
        let mut builder = Request::builder().method("POST").uri("/me");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, "Bearer abc.def".parse().unwrap());
        assert_eq!(extract_bearer_token(&headers), Some("abc.def"));

        headers.insert(header::AUTHORIZATION, "bearer abc.def".parse().unwrap());
        assert_eq!(extract_bearer_token(&headers), Some("abc.def"));

        headers.insert(header::AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());
        assert_eq!(extract_bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, "Bearer ".parse().unwrap());
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler() {
        let auth = auth();
        let token = auth.create_access_token("42", "alice").unwrap();

        let response = app(auth)
            .oneshot(request(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_token_is_401_with_challenge() {
        let response = app(auth()).oneshot(request(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[header::WWW_AUTHENTICATE], "Bearer");
    }

    #[tokio::test]
    async fn test_invalid_token_is_401() {
        let response = app(auth())
            .oneshot(request(Some("Bearer not-a-token")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
