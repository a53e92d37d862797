//! Syntactic validation of submitted long URLs.
//!
//! The accepted shape is deliberately loose: an optional `http://` or
//! `https://` scheme, a host made of letters, digits, dots and hyphens that
//! ends in a dot followed by at least two letters, and an optional path that
//! starts with `/` and contains no whitespace. Input is checked verbatim,
//! without trimming or normalization.

use crate::error::AppError;
use regex::Regex;
use std::sync::LazyLock;

/// Compiled long URL pattern.
static LONG_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([a-zA-Z0-9.-]+)\.([a-zA-Z]{2,})(/\S*)?$").unwrap()
});

/// Returns true if `url` matches the accepted long URL pattern.
pub fn is_valid_url(url: &str) -> bool {
    LONG_URL_REGEX.is_match(url)
}

/// Validates an optional long URL submitted by a client.
///
/// # Errors
///
/// Returns [`AppError::MissingUrl`] if the value is absent or empty, and
/// [`AppError::InvalidUrl`] if it does not match the accepted pattern.
pub fn validate_long_url(candidate: Option<&str>) -> Result<&str, AppError> {
    let url = match candidate {
        Some(url) if !url.is_empty() => url,
        _ => return Err(AppError::MissingUrl),
    };

    if !is_valid_url(url) {
        return Err(AppError::InvalidUrl);
    }

    Ok(url)
}
