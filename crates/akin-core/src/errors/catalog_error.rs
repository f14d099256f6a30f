//! Catalog snapshot errors.

use super::error_code::{self, AkinErrorCode};

/// Errors raised while building or decoding a catalog snapshot.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate candidate id: {id}")]
    DuplicateCandidate { id: String },

    #[error("duplicate feature key: {key}")]
    DuplicateFeature { key: String },

    #[error("incidence references unknown candidate: {id}")]
    UnknownCandidate { id: String },

    #[error("incidence references unknown feature: {key}")]
    UnknownFeature { key: String },

    #[error("confidence {value} for {what} is outside [0, 1]")]
    ConfidenceOutOfRange { what: String, value: f64 },

    #[error("catalog has no candidates")]
    Empty,

    #[error("catalog decode failed: {message}")]
    ParseError { message: String },
}

impl AkinErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_ERROR
    }
}
