//! Error handling for Akin.
//! One error enum per subsystem, `thiserror` only.

pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod session_error;
pub mod storage_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::AkinErrorCode;
pub use session_error::SessionError;
pub use storage_error::StorageError;

/// Umbrella error for callers that drive the whole engine.
#[derive(Debug, thiserror::Error)]
pub enum AkinError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AkinErrorCode for AkinError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Catalog(e) => e.error_code(),
            Self::Session(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
        }
    }
}

pub type AkinResult<T> = Result<T, AkinError>;
