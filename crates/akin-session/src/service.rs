//! AkinService: session lifecycle over a repository and a history sink.

use std::sync::Arc;

use akin_core::config::AkinConfig;
use akin_core::errors::{AkinResult, SessionError};
use akin_core::models::{AiGate, Answer, Catalog, PlayRecord, Session};
use akin_core::traits::{CatalogSource, PlayHistorySink, SessionRepository};
use tracing::{debug, info};

use crate::machine::SessionMachine;
use crate::turn::Turn;

/// Entry point for callers: start a session, answer, resolve a fail list.
///
/// Each call loads the session, runs one turn and saves it back. Sessions
/// are independent; turns on the same session must be issued one at a time.
pub struct AkinService<R, H> {
    config: Arc<AkinConfig>,
    catalog: Arc<Catalog>,
    repository: R,
    history: H,
}

impl<R: SessionRepository, H: PlayHistorySink> AkinService<R, H> {
    pub fn new(config: Arc<AkinConfig>, catalog: Arc<Catalog>, repository: R, history: H) -> Self {
        Self {
            config,
            catalog,
            repository,
            history,
        }
    }

    /// Build a service over a full snapshot taken from `source`.
    pub fn from_source(
        config: Arc<AkinConfig>,
        source: &dyn CatalogSource,
        repository: R,
        history: H,
    ) -> AkinResult<Self> {
        let catalog = source.snapshot(None)?;
        info!(
            candidates = catalog.len(),
            features = catalog.feature_count(),
            "catalog snapshot loaded"
        );
        Ok(Self::new(config, catalog, repository, history))
    }

    pub fn config(&self) -> &AkinConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn machine(&self) -> SessionMachine<'_> {
        SessionMachine::new(&self.config, &self.catalog)
    }

    /// Start a session. A fresh v4 UUID is used when `session_id` is `None`.
    pub fn start(&self, session_id: Option<String>, ai_gate: AiGate) -> AkinResult<(String, Turn)> {
        let id = session_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let (session, turn) = self.machine().start(id, ai_gate)?;
        self.persist(&session, &turn)?;
        Ok((session.session_id, turn))
    }

    pub fn answer(&self, session_id: &str, answer: Answer) -> AkinResult<Turn> {
        let mut session = self.load(session_id)?;
        let turn = self.machine().answer(&mut session, answer)?;
        self.persist(&session, &turn)?;
        Ok(turn)
    }

    pub fn resolve_fail_list(&self, session_id: &str, choice: Option<&str>) -> AkinResult<Turn> {
        let mut session = self.load(session_id)?;
        let turn = self.machine().resolve_fail_list(&mut session, choice)?;
        self.persist(&session, &turn)?;
        Ok(turn)
    }

    /// Current state of a stored session.
    pub fn session(&self, session_id: &str) -> AkinResult<Session> {
        self.load(session_id)
    }

    /// Drop a session from the repository. Returns whether it existed.
    pub fn discard(&self, session_id: &str) -> AkinResult<bool> {
        let removed = self.repository.remove(session_id)?.is_some();
        debug!(session_id, removed, "session discarded");
        Ok(removed)
    }

    fn load(&self, session_id: &str) -> AkinResult<Session> {
        self.repository.load(session_id)?.ok_or_else(|| {
            SessionError::NotFound {
                id: session_id.to_string(),
            }
            .into()
        })
    }

    /// Save the session and, on a terminal turn, write its play record.
    /// Terminal sessions stay stored so later calls report `Terminated`.
    fn persist(&self, session: &Session, turn: &Turn) -> AkinResult<()> {
        self.repository.save(session)?;
        if turn.is_finished() {
            if let Some(record) = PlayRecord::from_session(session)? {
                self.history.record(&record)?;
            }
        }
        Ok(())
    }
}
