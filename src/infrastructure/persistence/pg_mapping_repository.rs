//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_short_code;

/// PostgreSQL repository for URL mappings.
///
/// The `url_mappings_short_code_key` unique constraint carries the core
/// uniqueness invariant; a violation on insert is surfaced as
/// [`AppError::Conflict`], turning check-then-insert into an atomic
/// insert-or-conflict.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository over a connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MappingRow {
    id: Uuid,
    original_url: String,
    short_code: String,
    custom: bool,
    created_at: DateTime<Utc>,
    click_count: i64,
}

impl From<MappingRow> for UrlMapping {
    fn from(row: MappingRow) -> Self {
        UrlMapping {
            id: row.id,
            original_url: row.original_url,
            short_code: row.short_code,
            custom: row.custom,
            created_at: row.created_at,
            click_count: row.click_count,
        }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn insert(&self, new_mapping: NewMapping) -> Result<UrlMapping, AppError> {
        let result = sqlx::query_as::<_, MappingRow>(
            r#"
            INSERT INTO url_mappings (id, original_url, short_code, custom)
            VALUES ($1, $2, $3, $4)
            RETURNING id, original_url, short_code, custom, created_at, click_count
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new_mapping.original_url)
        .bind(&new_mapping.short_code)
        .bind(new_mapping.custom)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(row) => Ok(row.into()),
            Err(e) if is_unique_violation_on_short_code(&e) => Err(AppError::conflict(
                "Short code is already taken",
                json!({ "code": new_mapping.short_code }),
            )),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT id, original_url, short_code, custom, created_at, click_count
            FROM url_mappings
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn record_visit(&self, short_code: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE url_mappings
            SET click_count = click_count + 1
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<UrlMapping>, AppError> {
        let rows = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT id, original_url, short_code, custom, created_at, click_count
            FROM url_mappings
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
