//! Short code generation.
//!
//! Codes are drawn from the operating system CSPRNG and encoded with the
//! URL-safe base64 alphabet (`A-Z a-z 0-9 - _`), so every character carries
//! six uniformly distributed bits.

use crate::error::AppError;
use base64::Engine as _;

/// Number of characters in a generated short code.
pub const CODE_LENGTH: usize = 7;

/// Random bytes drawn per code. Six bytes encode to eight characters, which
/// are then cut down to [`CODE_LENGTH`].
const CODE_LENGTH_BYTES: usize = 6;

/// Generates a random 7-character URL-safe short code.
///
/// No uniqueness check is performed here; collisions are detected by the
/// database unique index on insert.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
pub fn generate_code() -> Result<String, AppError> {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer)
        .map_err(|e| AppError::Internal(format!("Failed to generate random bytes: {e}")))?;

    let mut code = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer);
    code.truncate(CODE_LENGTH);

    Ok(code)
}

/// Returns true if `c` belongs to the short code alphabet.
pub fn is_code_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
