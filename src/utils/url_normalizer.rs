//! URL normalization and structural validation.
//!
//! Inputs missing a scheme get `https://` prepended, then the result is
//! checked against a structural pattern: scheme + (domain with a TLD,
//! `localhost`, or a dotted-quad IPv4) + optional port + optional path/query.

use regex::Regex;
use std::sync::LazyLock;

/// Structural URL pattern applied after scheme normalization.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^https?://(?:(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,6}\.?|localhost|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})(?::\d+)?(?:/?|[/?]\S+)$",
    )
    .expect("URL pattern must compile")
});

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format")]
    InvalidFormat,
}

/// Normalizes and validates a URL.
///
/// Prepends `https://` when the input lacks an explicit `http://` or
/// `https://` scheme, then validates the structural pattern. The returned
/// string always carries an explicit scheme.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Empty`] for empty input and
/// [`UrlNormalizationError::InvalidFormat`] when the normalized string does
/// not match the pattern.
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    if input.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let normalized = if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{input}")
    };

    if !URL_PATTERN.is_match(&normalized) {
        return Err(UrlNormalizationError::InvalidFormat);
    }

    Ok(normalized)
}
