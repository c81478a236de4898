#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use chrono::{Duration, Utc};
use serde_json::json;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use shortly::prelude::{AppState, MappingRepository, NewMapping, ShortenerService, UrlMapping};
use shortly::routes::api_routes;
use shortly::AppError;

pub const TEST_BASE_URL: &str = "http://localhost:3000";

/// In-memory repository double mirroring the store contract: `short_code` is
/// unique, inserts are atomic insert-or-conflict, `created_at` is assigned at
/// insert time.
#[derive(Default)]
pub struct InMemoryRepository {
    mappings: Mutex<Vec<UrlMapping>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MappingRepository for InMemoryRepository {
    async fn insert(&self, new_mapping: NewMapping) -> Result<UrlMapping, AppError> {
        let mut mappings = self.mappings.lock().unwrap();

        if mappings
            .iter()
            .any(|m| m.short_code == new_mapping.short_code)
        {
            return Err(AppError::conflict(
                "Short code is already taken",
                json!({ "code": new_mapping.short_code }),
            ));
        }

        // Successive inserts can land on the same clock tick; nudge the
        // timestamp forward so created_at stays strictly increasing.
        let mut created_at = Utc::now();
        if let Some(last) = mappings.iter().map(|m| m.created_at).max() {
            if created_at <= last {
                created_at = last + Duration::microseconds(1);
            }
        }

        let mapping = UrlMapping {
            id: Uuid::new_v4(),
            original_url: new_mapping.original_url,
            short_code: new_mapping.short_code,
            custom: new_mapping.custom,
            created_at,
            click_count: 0,
        };

        mappings.push(mapping.clone());
        Ok(mapping)
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        let mappings = self.mappings.lock().unwrap();
        Ok(mappings
            .iter()
            .find(|m| m.short_code == short_code)
            .cloned())
    }

    async fn record_visit(&self, short_code: &str) -> Result<bool, AppError> {
        let mut mappings = self.mappings.lock().unwrap();

        match mappings.iter_mut().find(|m| m.short_code == short_code) {
            Some(mapping) => {
                mapping.click_count += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<UrlMapping>, AppError> {
        let mut mappings = self.mappings.lock().unwrap().clone();
        mappings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        mappings.truncate(limit.max(0) as usize);
        Ok(mappings)
    }
}

/// Builds the API router backed by a fresh in-memory repository.
pub fn test_app() -> Router {
    let repository = Arc::new(InMemoryRepository::new());
    let shortener = Arc::new(ShortenerService::new(repository, TEST_BASE_URL.to_string()));

    Router::new()
        .nest("/api", api_routes())
        .with_state(AppState::new(shortener))
}
