//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST routes for table layout, validation and submission
//! - Mapping of application errors to JSON responses

pub mod error;
pub mod routes;

use axum::Router;
use std::sync::Arc;
use tabula_core::engine::TableEngine;
use tabula_shared::EngineConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Evaluation pipeline.
    pub engine: Arc<TableEngine>,
    /// Engine settings, including request limits.
    pub config: Arc<EngineConfig>,
}

impl AppState {
    /// Builds the state from the `engine` configuration section.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: Arc::new(TableEngine::from_config(&config)),
            config: Arc::new(config),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
