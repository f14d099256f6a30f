use crate::errors::StorageError;
use crate::models::PlayRecord;

/// Receives one record per terminal session.
pub trait PlayHistorySink: Send + Sync {
    fn record(&self, record: &PlayRecord) -> Result<(), StorageError>;
}
