//! Handlers for single and bulk URL shortening.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{
    BulkShortenRequest, BulkShortenResponse, MappingResponse, ShortenRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL with an optional caller-chosen alias.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Errors
///
/// Returns 422 for a malformed URL or alias and 400 when the alias is
/// already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<MappingResponse>), AppError> {
    payload.validate()?;

    let mapping = state
        .shortener
        .shorten(payload.url, payload.custom_code)
        .await?;

    let short_url = state.shortener.short_url(&mapping.short_code);

    Ok((
        StatusCode::CREATED,
        Json(MappingResponse::from_mapping(mapping, short_url)),
    ))
}

/// Shortens up to 50 URLs in one request.
///
/// # Endpoint
///
/// `POST /api/shorten-bulk`
///
/// URLs are processed independently with auto-generated codes; a failing
/// entry contributes an indexed error message and does not abort the batch.
///
/// # Errors
///
/// Returns 422 when the batch is empty or exceeds 50 entries.
pub async fn shorten_bulk_handler(
    State(state): State<AppState>,
    Json(payload): Json<BulkShortenRequest>,
) -> Result<Json<BulkShortenResponse>, AppError> {
    payload.validate()?;

    let outcome = state.shortener.shorten_bulk(payload.urls).await?;

    let results: Vec<MappingResponse> = outcome
        .results
        .into_iter()
        .map(|mapping| {
            let short_url = state.shortener.short_url(&mapping.short_code);
            MappingResponse::from_mapping(mapping, short_url)
        })
        .collect();

    Ok(Json(BulkShortenResponse {
        total_processed: results.len(),
        results,
        errors: outcome.errors,
    }))
}
