//! DTOs for the listing endpoint.

use serde::Deserialize;

/// Query parameters for listing recent mappings.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Maximum number of records to return (default 50, clamped to 1..=500).
    pub limit: Option<i64>,
}
