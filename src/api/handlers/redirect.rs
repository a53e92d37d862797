//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::location::encode_location;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /redirect/{short_url}`
///
/// Responds `302 Found` with `Location` set to the stored URL, percent-encoded
/// where the raw value would not be a valid header. Lookups never modify the
/// stored mapping, so repeated requests yield the same target.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 on storage failure.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.resolve(&code).await?;

    let location = HeaderValue::try_from(encode_location(&link.original_url)).map_err(|e| {
        AppError::Internal(format!("Stored URL for '{code}' is not a valid header: {e}"))
    })?;

    tracing::debug!(code = %code, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
