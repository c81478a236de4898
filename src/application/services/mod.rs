//! Application services.

mod shortener_service;

pub use shortener_service::{BulkOutcome, ShortenerService};
