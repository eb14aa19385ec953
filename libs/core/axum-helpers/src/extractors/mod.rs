//! Custom extractors for Axum handlers.
//!
//! Extractors here reject with [`crate::AppError`] so malformed requests get
//! the standard error body.

pub mod validated_json;

pub use validated_json::ValidatedJson;
