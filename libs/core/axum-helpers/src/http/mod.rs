//! HTTP middleware module.
//!
//! Provides CORS layers and security response headers.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{create_cors_layer, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(create_cors_layer(origins));
//! ```

pub mod cors;
pub mod security;

pub use cors::{
    cors_layer_from_env, create_cors_layer, create_permissive_cors_layer, parse_allowed_origins,
};
pub use security::security_headers;
