//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;

/// Handler state: the shortener service with its injected repository.
///
/// The store handle lives inside the repository held by the service; no
/// process-wide global is involved.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
}

impl AppState {
    pub fn new(shortener: Arc<ShortenerService>) -> Self {
        Self { shortener }
    }
}
