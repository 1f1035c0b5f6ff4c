//! Session repository port and an in-memory implementation.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{
    errors::{TimetableError, TimetableResult},
    models::session::{Session, SessionDraft, SessionId},
};

/// Storage for scheduled sessions.
///
/// The repository owns the session collection. Conflict detection only reads
/// from it through [`SessionRepository::list_sessions`]; callers are expected
/// to validate a draft before handing it to `insert` or `update`.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Snapshot of every stored session.
    async fn list_sessions(&self) -> TimetableResult<Vec<Session>>;

    async fn get(&self, id: SessionId) -> TimetableResult<Option<Session>>;

    /// Stores a new session and returns the id assigned to it.
    async fn insert(&self, draft: &SessionDraft) -> TimetableResult<SessionId>;

    /// Replaces the fields of an existing session.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no session has this id
    async fn update(&self, id: SessionId, draft: &SessionDraft) -> TimetableResult<()>;

    /// # Errors
    ///
    /// - `NotFound` if no session has this id
    async fn delete(&self, id: SessionId) -> TimetableResult<()>;
}

/// Sessions held in process memory, listed in insertion order.
#[derive(Debug, Default)]
pub struct MemorySessionRepository {
    sessions: RwLock<Vec<Session>>,
}

impl MemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the repository with existing sessions.
    ///
    /// # Errors
    ///
    /// - `InvalidInterval` if any session ends at or before its start
    pub fn with_sessions(sessions: Vec<Session>) -> TimetableResult<Self> {
        for session in &sessions {
            session.interval()?;
        }

        Ok(Self {
            sessions: RwLock::new(sessions),
        })
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

fn not_found(id: SessionId) -> TimetableError {
    TimetableError::NotFound(format!("Session with ID {} not found", id))
}

#[async_trait]
impl SessionRepository for MemorySessionRepository {
    async fn list_sessions(&self) -> TimetableResult<Vec<Session>> {
        Ok(self.sessions.read().await.clone())
    }

    async fn get(&self, id: SessionId) -> TimetableResult<Option<Session>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.iter().find(|s| s.id == id).cloned())
    }

    async fn insert(&self, draft: &SessionDraft) -> TimetableResult<SessionId> {
        let id = SessionId::new();
        let session = Session::from_draft(id, draft.clone())?;

        debug!(
            "Inserting session: id={}, day={}, {}-{}",
            id,
            session.day,
            session.start,
            session.end
        );
        self.sessions.write().await.push(session);

        Ok(id)
    }

    async fn update(&self, id: SessionId, draft: &SessionDraft) -> TimetableResult<()> {
        let updated = Session::from_draft(id, draft.clone())?;

        let mut sessions = self.sessions.write().await;
        let slot = sessions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| not_found(id))?;

        debug!("Updating session: id={}", id);
        *slot = updated;

        Ok(())
    }

    async fn delete(&self, id: SessionId) -> TimetableResult<()> {
        let mut sessions = self.sessions.write().await;
        let position = sessions
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| not_found(id))?;

        debug!("Deleting session: id={}", id);
        sessions.remove(position);

        Ok(())
    }
}
