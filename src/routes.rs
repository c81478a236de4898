//! Router configuration.
//!
//! # Route Structure (all under the `/api` prefix)
//!
//! - `POST /api/shorten`          - Create a shortened URL
//! - `POST /api/shorten-bulk`     - Create up to 50 shortened URLs
//! - `GET  /api/urls`             - List recent mappings, newest first
//! - `GET  /api/r/{short_code}`   - Redirect to the original URL
//! - `GET  /api/health`           - Liveness check
//!
//! # Middleware
//!
//! - **Tracing** - per-request spans with status and latency
//! - **CORS** - origin allow-list from configuration
//! - **Path normalization** - trailing slash handling

use crate::api::handlers::{
    health_handler, list_urls_handler, redirect_handler, shorten_bulk_handler, shorten_handler,
};
use crate::state::AppState;
use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// API endpoints without middleware, for composition and tests.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/shorten-bulk", post(shorten_bulk_handler))
        .route("/urls", get(list_urls_handler))
        .route("/r/{short_code}", get(redirect_handler))
        .route("/health", get(health_handler))
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, allowed_origins: &[String]) -> NormalizePath<Router> {
    let router = Router::new()
        .nest("/api", api_routes())
        .with_state(state)
        .layer(cors_layer(allowed_origins))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Builds the CORS layer from the configured origin allow-list.
///
/// A literal `*` entry allows any origin; otherwise only the listed origins
/// are accepted. Entries that do not parse as header values are dropped with
/// a warning.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(origins)
}
