//! Repository trait for URL mapping data access.

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the persisted collection of URL mappings.
///
/// The store enforces uniqueness of `short_code`; an insert that would violate
/// it reports the conflict atomically instead of relying on a pre-check.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Inserts a new mapping as a single atomic operation.
    ///
    /// `id` and `created_at` are assigned by the repository; `click_count`
    /// starts at 0. The full persisted record is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `short_code` is already taken.
    /// Returns [`AppError::Internal`] on store errors.
    async fn insert(&self, new_mapping: NewMapping) -> Result<UrlMapping, AppError>;

    /// Finds a mapping by exact `short_code` match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Increments `click_count` by 1 for the given code.
    ///
    /// The update is filtered on `short_code`; matching zero records is a
    /// no-op and returns `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn record_visit(&self, short_code: &str) -> Result<bool, AppError>;

    /// Lists the most recently created mappings, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<UrlMapping>, AppError>;
}
