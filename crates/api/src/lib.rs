//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes
//! - A JSON extractor that reports malformed bodies as validation errors
//! - Error-to-response mapping

pub mod error;
pub mod extractors;
pub mod routes;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use axum::Router;
use hsa_core::ledger::Ledger;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// The account and card store.
    pub ledger: Arc<Ledger>,
}

impl AppState {
    /// Wraps a ledger for sharing across handlers.
    #[must_use]
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: Arc::new(ledger),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
