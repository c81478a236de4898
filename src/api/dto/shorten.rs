//! DTOs for the shorten endpoints.

use crate::domain::entities::UrlMapping;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request to shorten a single URL, optionally under a caller-chosen alias.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten; `https://` is prepended when no scheme
    /// is present.
    pub url: String,

    /// Optional custom short code (3-20 characters of `[A-Za-z0-9_-]`).
    #[validate(length(min = 3, max = 20))]
    pub custom_code: Option<String>,
}

/// Request to shorten a batch of URLs (1-50 entries).
#[derive(Debug, Deserialize, Validate)]
pub struct BulkShortenRequest {
    #[validate(length(min = 1, max = 50))]
    pub urls: Vec<String>,
}

/// A full URL mapping record as returned to callers.
#[derive(Debug, Serialize)]
pub struct MappingResponse {
    pub id: Uuid,
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub custom: bool,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl MappingResponse {
    /// Builds the response record from a persisted mapping and its derived
    /// short URL.
    pub fn from_mapping(mapping: UrlMapping, short_url: String) -> Self {
        Self {
            id: mapping.id,
            original_url: mapping.original_url,
            short_code: mapping.short_code,
            short_url,
            custom: mapping.custom,
            created_at: mapping.created_at,
            click_count: mapping.click_count,
        }
    }
}

/// Response for a bulk shorten request.
#[derive(Debug, Serialize)]
pub struct BulkShortenResponse {
    /// Successfully created records, in input order.
    pub results: Vec<MappingResponse>,
    /// Number of successes.
    pub total_processed: usize,
    /// Per-entry error messages, indexed `"URL {n} ({input}): {reason}"`.
    pub errors: Vec<String>,
}
