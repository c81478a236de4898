//! URL mapping entity: one short code bound to one original URL.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A persisted short-code to URL mapping.
///
/// Records are created once and never deleted; the only mutation over their
/// lifetime is the `click_count` increment performed on each resolution.
#[derive(Debug, Clone)]
pub struct UrlMapping {
    pub id: Uuid,
    pub original_url: String,
    pub short_code: String,
    pub custom: bool,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

/// Input data for creating a new mapping.
///
/// `id` and `created_at` are assigned at insert time; `click_count` starts at 0.
#[derive(Debug, Clone)]
pub struct NewMapping {
    pub original_url: String,
    pub short_code: String,
    pub custom: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_fields() {
        let now = Utc::now();
        let mapping = UrlMapping {
            id: Uuid::new_v4(),
            original_url: "https://example.com".to_string(),
            short_code: "abc12345".to_string(),
            custom: false,
            created_at: now,
            click_count: 0,
        };

        assert_eq!(mapping.original_url, "https://example.com");
        assert_eq!(mapping.short_code, "abc12345");
        assert!(!mapping.custom);
        assert_eq!(mapping.created_at, now);
        assert_eq!(mapping.click_count, 0);
    }

    #[test]
    fn test_new_mapping_carries_custom_flag() {
        let new_mapping = NewMapping {
            original_url: "https://rust-lang.org".to_string(),
            short_code: "my-code".to_string(),
            custom: true,
        };

        assert!(new_mapping.custom);
        assert_eq!(new_mapping.short_code, "my-code");
    }
}
