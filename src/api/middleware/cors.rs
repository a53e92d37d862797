//! CORS layer configuration.

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

/// Builds a CORS layer that admits a single browser origin.
///
/// Allows `GET`, `POST` and preflight `OPTIONS` requests carrying a
/// `Content-Type` header.
///
/// # Errors
///
/// Returns an error if `allowed_origin` is not a valid header value.
pub fn layer(allowed_origin: &str) -> Result<CorsLayer> {
    let origin: HeaderValue = allowed_origin
        .parse()
        .with_context(|| format!("Invalid CORS origin '{allowed_origin}'"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}
