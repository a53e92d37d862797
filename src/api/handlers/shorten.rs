//! Handler for the link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "longUrl": "https://example.com/page" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "shortUrl": "http://jclip.com/V1StGXR" }
/// ```
///
/// # Errors
///
/// - 400 if `longUrl` is missing or empty, or does not look like a URL
/// - 400 if the body is malformed JSON
/// - 500 on storage failure
///
/// A body sent without a JSON content type is treated as empty, so it fails
/// with the missing-URL error.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(JsonRejection::MissingJsonContentType(_)) => ShortenRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };

    let long_url = payload.long_url_text();
    let link = state
        .link_service
        .create_short_link(long_url.as_deref())
        .await?;

    let short_url = state.link_service.short_url(&link);
    tracing::info!(code = %link.short_code, "Shortened URL");

    Ok((StatusCode::CREATED, Json(ShortenResponse { short_url })))
}
