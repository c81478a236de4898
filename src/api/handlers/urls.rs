//! Handler for listing recent mappings.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::list::ListQuery;
use crate::api::dto::shorten::MappingResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the most recently created mappings, newest first.
///
/// # Endpoint
///
/// `GET /api/urls?limit=N`
///
/// Pure read, no side effects. `limit` defaults to 50 and is clamped to
/// 1..=500.
pub async fn list_urls_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<MappingResponse>>, AppError> {
    let mappings = state.shortener.list_recent(query.limit).await?;

    let records = mappings
        .into_iter()
        .map(|mapping| {
            let short_url = state.shortener.short_url(&mapping.short_code);
            MappingResponse::from_mapping(mapping, short_url)
        })
        .collect();

    Ok(Json(records))
}
