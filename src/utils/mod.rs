//! Utility functions for code generation, URL validation, and store errors.
//!
//! - [`codegen`] - Short code generation and custom code validation
//! - [`url_normalizer`] - URL normalization and structural validation
//! - [`db_error`] - Classification of database constraint violations

pub mod codegen;
pub mod db_error;
pub mod url_normalizer;
