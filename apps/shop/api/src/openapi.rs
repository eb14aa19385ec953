use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Pulls the users domain document in at the root, since its routes are
/// not nested under a prefix.
struct UsersApi;

impl Modify for UsersApi {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.merge(domain_users::handlers::ApiDoc::openapi());
    }
}

/// Declares the `bearer_auth` scheme referenced by `/user/me`.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(crate::api::root),
    components(
        schemas(axum_helpers::ErrorResponse, crate::api::Greeting)
    ),
    info(
        title = "EasyShop API",
        version = "0.1.0",
        description = "Account registration, login and email verification for EasyShop"
    ),
    modifiers(&UsersApi, &BearerAuth),
    tags((name = "root", description = "Service greeting"))
)]
pub struct ApiDoc;
