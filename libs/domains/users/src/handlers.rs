use axum::{
    Extension, Form, Json, Router,
    extract::{Query, State, rejection::FormRejection, rejection::QueryRejection},
    middleware,
    response::Html,
    routing::{get, post},
};
use axum_helpers::{
    AppError, JwtClaims, ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, UnauthorizedResponse,
    },
    jwt_auth_middleware,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{
    ProfileEnvelope, ProfileResponse, RegisterUser, RegistrationResponse, TokenRequest,
    TokenResponse, VerificationQuery,
};
use crate::pages;
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for the account endpoints
#[derive(OpenApi)]
#[openapi(
    paths(register, token, me, verify_email),
    components(
        schemas(
            RegisterUser,
            RegistrationResponse,
            TokenRequest,
            TokenResponse,
            ProfileEnvelope,
            ProfileResponse
        ),
        responses(
            BadRequestValidationResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags((name = "users", description = "Registration, login and email verification"))
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
///
/// Routes are absolute (`/registration`, `/token`, `/user/me`,
/// `/verification`) and meant to be merged at the root.
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let auth = service.jwt().clone();
    let shared_service = Arc::new(service);

    let protected = Router::new()
        .route("/user/me", post(me::<R>))
        .route_layer(middleware::from_fn_with_state(auth, jwt_auth_middleware));

    Router::new()
        .route("/registration", post(register::<R>))
        .route("/token", post(token::<R>))
        .route("/verification", get(verify_email::<R>))
        .merge(protected)
        .with_state(shared_service)
}

/// Register a new account
///
/// Creates the user and their business, and emails a verification link.
#[utoipa::path(
    post,
    path = "/registration",
    tag = "users",
    request_body = RegisterUser,
    responses(
        (status = 200, description = "User registered", body = RegistrationResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn register<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<RegisterUser>,
) -> Result<Json<RegistrationResponse>, AppError> {
    let user = service.register(input).await?;
    Ok(Json(RegistrationResponse::for_user(&user)))
}

/// OAuth2 password grant
#[utoipa::path(
    post,
    path = "/token",
    tag = "users",
    request_body(content = TokenRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Bearer token issued", body = TokenResponse),
        (status = 401, response = UnauthorizedResponse)
    )
)]
async fn token<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    form: Result<Form<TokenRequest>, FormRejection>,
) -> Result<Json<TokenResponse>, AppError> {
    let Form(input) = form?;
    let token = service.issue_token(&input.username, &input.password).await?;
    Ok(Json(token))
}

/// Current user profile
#[utoipa::path(
    post,
    path = "/user/me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile of the token's user", body = ProfileEnvelope),
        (status = 401, response = UnauthorizedResponse)
    )
)]
async fn me<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Extension(claims): Extension<JwtClaims>,
) -> Result<Json<ProfileEnvelope>, AppError> {
    let user = service.current_user(&claims).await?;
    Ok(Json(ProfileEnvelope::from(&user)))
}

/// Confirm an email address from the emailed link
#[utoipa::path(
    get,
    path = "/verification",
    tag = "users",
    params(VerificationQuery),
    responses(
        (status = 200, description = "Confirmation page", content_type = "text/html", body = String),
        (status = 401, response = UnauthorizedResponse)
    )
)]
async fn verify_email<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    query: Result<Query<VerificationQuery>, QueryRejection>,
) -> Result<Html<String>, AppError> {
    let Query(VerificationQuery { token }) = query?;
    let user = service.verify_email(&token).await?;
    Ok(Html(pages::render_verified(&user.username)?))
}
