//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/r/{short_code}`
///
/// Every successful resolution persists a click-count increment before the
/// redirect is issued.
///
/// # Errors
///
/// Returns 404 when the short code is unknown.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let original_url = state.shortener.resolve(&short_code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]).into_response())
}
