//! Infrastructure layer: external integrations.

pub mod persistence;
