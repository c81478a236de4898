//! Short code generation and custom code validation.

use crate::error::AppError;
use rand::{Rng, distr::Alphanumeric};
use serde_json::json;
use uuid::Uuid;

/// Length of generated short codes.
pub const CODE_LENGTH: usize = 8;

/// Minimum length of a caller-supplied custom code.
pub const CUSTOM_CODE_MIN: usize = 3;

/// Maximum length of a caller-supplied custom code.
pub const CUSTOM_CODE_MAX: usize = 20;

/// Generates a random alphanumeric short code of [`CODE_LENGTH`] characters.
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Derives a short code from a freshly generated UUID, truncated to
/// [`CODE_LENGTH`].
///
/// Used as the last-resort fallback when random generation keeps colliding.
/// Trades uniform randomness for a uniqueness guarantee.
pub fn fallback_code() -> String {
    let id = Uuid::new_v4().simple().to_string();
    id[..CODE_LENGTH].to_string()
}

/// Validates a caller-supplied custom short code.
///
/// # Rules
///
/// - Length: 3-20 characters
/// - Allowed characters: letters, digits, hyphens, underscores
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.len() < CUSTOM_CODE_MIN || code.len() > CUSTOM_CODE_MAX {
        return Err(AppError::validation(
            "Custom code must be between 3 and 20 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::validation(
            "Custom code can only contain letters, numbers, hyphens, and underscores",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
