use crate::errors::StorageError;
use crate::models::Session;

/// Owns session lifetime between turns. The state machine itself never
/// touches storage; callers load before a turn and save after it.
pub trait SessionRepository: Send + Sync {
    fn load(&self, session_id: &str) -> Result<Option<Session>, StorageError>;
    fn save(&self, session: &Session) -> Result<(), StorageError>;
    fn remove(&self, session_id: &str) -> Result<Option<Session>, StorageError>;
}
