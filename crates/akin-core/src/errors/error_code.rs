//! AkinErrorCode trait for boundary conversion.

/// Every error enum provides a structured error code string so a
/// request layer can map failures without matching on variants.
pub trait AkinErrorCode {
    /// Returns the error code string (e.g., "SESSION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const SESSION_ERROR: &str = "SESSION_ERROR";
pub const SESSION_TERMINATED: &str = "SESSION_TERMINATED";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
