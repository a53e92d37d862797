//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`               - Create a short URL
//! - `GET  /redirect/{short_url}`  - Redirect to the original URL
//! - `GET  /health`                - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Single allowed browser origin

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors` - CORS policy, see [`crate::api::middleware::cors::layer`]
pub fn app_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .merge(api::routes::link_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(tracing::layer()).layer(cors))
}
