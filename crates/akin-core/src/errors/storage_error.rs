//! Errors from session repositories and play-history sinks.

use super::error_code::{self, AkinErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage backend failed: {reason}")]
    Backend { reason: String },

    #[error("record serialization failed: {reason}")]
    Serialization { reason: String },
}

impl AkinErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        error_code::STORAGE_ERROR
    }
}
