use axum::{Json, Router, routing::get};
use axum_helpers::{create_router, health_router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use utoipa::ToSchema;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod health;
pub mod users;

/// Body of the root greeting
#[derive(Debug, Serialize, ToSchema)]
pub struct Greeting {
    #[serde(rename = "Message")]
    #[schema(example = "Hello world")]
    pub message: &'static str,
}

/// Liveness greeting
#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses((status = 200, description = "Greeting", body = Greeting))
)]
pub async fn root() -> Json<Greeting> {
    Json(Greeting {
        message: "Hello world",
    })
}

/// Creates the API routes, mounted at the root.
///
/// Takes a reference to AppState and initializes all services. Returns a
/// stateless Router (all sub-routers have state already applied).
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(users::router(state))
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// This router has state applied and can be merged with the stateless app router
/// from `create_router`.
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

/// Full application: API routes with docs and middleware, plus /health and /ready.
pub fn app(state: AppState, cors: CorsLayer) -> Router {
    // create_router adds docs/middleware to our composed routes
    create_router::<ApiDoc>(routes(&state), cors)
        .merge(health_router(state.config.app))
        .merge(ready_router(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum_helpers::{JwtAuth, JwtConfig, create_permissive_cors_layer};
    use core_config::{AppInfo, server::ServerConfig};
    use database::sqlite::SqliteConfig;
    use email::{MockSmtpProvider, SmtpConfig, TemplateEngine};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use test_utils::TestDatabase;
    use tower::ServiceExt;

    async fn test_app() -> (Router, TestDatabase, Arc<MockSmtpProvider>) {
        let db = TestDatabase::new().await;
        let mail = Arc::new(MockSmtpProvider::new());
        let jwt_config = JwtConfig::new("app-test-secret-that-is-long-enough!!");

        let state = AppState {
            config: Config {
                app: AppInfo {
                    name: "shop_api",
                    version: "0.1.0",
                },
                database: SqliteConfig::in_memory(),
                server: ServerConfig::default(),
                jwt: jwt_config.clone(),
                smtp: SmtpConfig::mailhog(),
                environment: Environment::Development,
                public_base_url: "http://shop.test".to_string(),
            },
            db: db.connection(),
            jwt: JwtAuth::new(&jwt_config),
            mail: mail.clone(),
            templates: TemplateEngine::new().unwrap(),
        };

        (app(state, create_permissive_cors_layer()), db, mail)
    }

    async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_root_greets() {
        let (app, _db, _mail) = test_app().await;

        let (status, body) = get_json(&app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "Message": "Hello world" }));
    }

    #[tokio::test]
    async fn test_health_and_ready() {
        let (app, _db, _mail) = test_app().await;

        let (status, body) = get_json(&app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "shop_api");

        let (status, body) = get_json(&app, "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (app, _db, _mail) = test_app().await;

        let (status, body) = get_json(&app, "/does-not-exist").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_registration_through_full_stack() {
        let (app, db, mail) = test_app().await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/registration")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({
                            "username": "zoe",
                            "email": "zoe@example.com",
                            "password": "pw"
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-content-type-options"));
        assert_eq!(db.count("users").await, 1);
        assert_eq!(db.count("businesses").await, 1);

        let sent = mail.last_sent().await.unwrap();
        assert!(
            sent.body_text
                .unwrap()
                .contains("http://shop.test/verification?token=")
        );
    }

    #[tokio::test]
    async fn test_openapi_document_lists_endpoints() {
        let (app, _db, _mail) = test_app().await;

        let (status, doc) = get_json(&app, "/api-docs/openapi.json").await;

        assert_eq!(status, StatusCode::OK);
        for path in ["/", "/registration", "/token", "/user/me", "/verification"] {
            assert!(doc["paths"].get(path).is_some(), "missing {path}");
        }
        assert!(doc["components"]["securitySchemes"]["bearer_auth"].is_object());
    }
}
