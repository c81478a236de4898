//! Code allocation and redirect resolution.

use std::sync::Arc;

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::codegen::{fallback_code, generate_code, validate_custom_code};
use crate::utils::url_normalizer::normalize_url;
use serde_json::json;

/// Maximum random-code attempts before falling back to a UUID-derived code.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Maximum number of URLs accepted per bulk request.
pub const MAX_BULK_URLS: usize = 50;

/// Default number of mappings returned by the listing.
const DEFAULT_LIST_LIMIT: i64 = 50;

/// Upper bound on the listing limit.
const MAX_LIST_LIMIT: i64 = 500;

/// Result of a bulk allocation: successes in input order plus per-entry errors.
#[derive(Debug)]
pub struct BulkOutcome {
    pub results: Vec<UrlMapping>,
    pub errors: Vec<String>,
}

/// Service for allocating short codes and resolving them back to URLs.
///
/// Operates against an injected [`MappingRepository`]; the uniqueness of
/// `short_code` is guaranteed by the store, so alias allocation is a single
/// atomic insert-or-conflict rather than a check-then-insert.
pub struct ShortenerService {
    repository: Arc<dyn MappingRepository>,
    base_url: String,
}

impl ShortenerService {
    /// Creates a new service around a repository and the externally visible
    /// base URL used to build `short_url` values.
    pub fn new(repository: Arc<dyn MappingRepository>, base_url: String) -> Self {
        Self {
            repository,
            base_url,
        }
    }

    /// Allocates a short code for a URL, persisting the mapping.
    ///
    /// The URL gets `https://` prepended when it lacks a scheme, then must
    /// match the structural URL pattern. A supplied alias must be 3-20
    /// characters of `[A-Za-z0-9_-]`; without one an 8-character alphanumeric
    /// code is generated with a bounded collision retry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed URL or alias,
    /// [`AppError::Conflict`] when the alias is already taken, and
    /// [`AppError::Internal`] on store errors.
    pub async fn shorten(
        &self,
        url: String,
        custom_code: Option<String>,
    ) -> Result<UrlMapping, AppError> {
        let original_url = normalize_url(&url).map_err(|e| {
            AppError::validation(e.to_string(), json!({ "field": "url", "value": url }))
        })?;

        match custom_code {
            Some(custom) => {
                validate_custom_code(&custom)?;

                // No pre-check: the unique constraint on short_code makes the
                // insert itself the conflict signal.
                self.repository
                    .insert(NewMapping {
                        original_url,
                        short_code: custom,
                        custom: true,
                    })
                    .await
            }
            None => self.allocate_generated(original_url).await,
        }
    }

    /// Allocates up to [`MAX_BULK_URLS`] URLs independently.
    ///
    /// Entries are trimmed and processed in order with auto-generated codes.
    /// A failing entry records an indexed error message and does not abort the
    /// batch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the batch is empty or exceeds
    /// [`MAX_BULK_URLS`]. Per-entry failures are reported in
    /// [`BulkOutcome::errors`], never as an overall error.
    pub async fn shorten_bulk(&self, urls: Vec<String>) -> Result<BulkOutcome, AppError> {
        if urls.is_empty() {
            return Err(AppError::validation(
                "At least one URL is required",
                json!({ "field": "urls" }),
            ));
        }

        if urls.len() > MAX_BULK_URLS {
            return Err(AppError::validation(
                format!("Maximum {MAX_BULK_URLS} URLs allowed per bulk request"),
                json!({ "field": "urls", "provided": urls.len() }),
            ));
        }

        let mut results = Vec::with_capacity(urls.len());
        let mut errors = Vec::new();

        for (idx, raw) in urls.iter().enumerate() {
            match self.shorten(raw.trim().to_string(), None).await {
                Ok(mapping) => results.push(mapping),
                Err(e) => errors.push(format!("URL {} ({}): {}", idx + 1, raw, e)),
            }
        }

        Ok(BulkOutcome { results, errors })
    }

    /// Resolves a short code to its original URL, recording the visit.
    ///
    /// The click-count increment is a filtered update keyed on the code; it is
    /// persisted before the URL is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code and
    /// [`AppError::Internal`] on store errors.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        let mapping = self
            .repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "code": short_code }))
            })?;

        self.repository.record_visit(short_code).await?;

        Ok(mapping.original_url)
    }

    /// Lists the most recently created mappings, newest first.
    ///
    /// `limit` defaults to 50 and is clamped to 1..=500.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list_recent(&self, limit: Option<i64>) -> Result<Vec<UrlMapping>, AppError> {
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT);
        self.repository.list_recent(limit).await
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, short_code: &str) -> String {
        format!(
            "{}/api/r/{}",
            self.base_url.trim_end_matches('/'),
            short_code
        )
    }

    /// Generates a unique code and inserts the mapping.
    ///
    /// Up to [`MAX_GENERATION_ATTEMPTS`] candidates are checked against the
    /// store; a conflict on insert (a lost race) also counts as a failed
    /// attempt. After that the code is derived from a fresh UUID, which is
    /// accepted without further retries.
    async fn allocate_generated(&self, original_url: String) -> Result<UrlMapping, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let candidate = generate_code();

            if self.repository.find_by_code(&candidate).await?.is_some() {
                continue;
            }

            match self
                .repository
                .insert(NewMapping {
                    original_url: original_url.clone(),
                    short_code: candidate,
                    custom: false,
                })
                .await
            {
                Err(AppError::Conflict { .. }) => continue,
                other => return other,
            }
        }

        tracing::warn!("random code generation exhausted, using uuid-derived fallback");

        self.repository
            .insert(NewMapping {
                original_url,
                short_code: fallback_code(),
                custom: false,
            })
            .await
    }
}
