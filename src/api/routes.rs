//! Public API route configuration.

use crate::api::handlers::{redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link routes.
///
/// # Endpoints
///
/// - `POST /shorten`                - Create a short URL
/// - `GET  /redirect/{short_url}`   - Redirect to the original URL
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/redirect/{short_url}", get(redirect_handler))
}
