//! API layer: request/response DTOs and HTTP handlers.

pub mod dto;
pub mod handlers;
