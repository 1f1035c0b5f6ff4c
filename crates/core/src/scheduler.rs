//! # Session staging
//!
//! [`Scheduler`] wraps a [`SessionRepository`] and is the only path through
//! which sessions should be written. Every write re-runs conflict detection
//! against a fresh snapshot while holding a single-writer lock, so a check
//! that passed on a form a moment ago cannot commit over a booking made in
//! between.

use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

use crate::{
    errors::{TimetableError, TimetableResult},
    models::{
        conflict::{Conflict, ConflictReport},
        session::{SessionDraft, SessionId},
    },
    repository::SessionRepository,
    validator::find_conflicts,
};

pub struct Scheduler<R> {
    repository: R,
    write_lock: Mutex<()>,
}

impl<R: SessionRepository> Scheduler<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Reports the conflicts a draft would cause without writing anything.
    ///
    /// Meant to be called as form fields change. Fails with `InvalidInterval`
    /// before touching the repository if `start >= end`.
    #[instrument(
        skip(self, draft),
        fields(day = %draft.day, teacher = %draft.teacher_id, room = %draft.room_id)
    )]
    pub async fn check(
        &self,
        draft: &SessionDraft,
        exclude_id: Option<SessionId>,
    ) -> TimetableResult<Vec<Conflict>> {
        draft.interval()?;

        let sessions = self.repository.list_sessions().await?;
        Ok(find_conflicts(draft, &sessions, exclude_id))
    }

    /// Validates a draft and commits it if it fits.
    ///
    /// With `exclude_id` unset the draft is inserted as a new session. With
    /// `exclude_id` set it replaces that session, which is also skipped
    /// during conflict detection. Returns the id of the stored session.
    ///
    /// # Errors
    ///
    /// - `InvalidInterval` if `start >= end`, before any repository access
    /// - `Conflict` with every clash found; nothing is written
    /// - repository errors such as `NotFound`, unchanged
    #[instrument(
        skip(self, draft),
        fields(day = %draft.day, teacher = %draft.teacher_id, room = %draft.room_id)
    )]
    pub async fn validate_and_stage(
        &self,
        draft: &SessionDraft,
        exclude_id: Option<SessionId>,
    ) -> TimetableResult<SessionId> {
        let interval = draft.interval()?;

        let _guard = self.write_lock.lock().await;

        let sessions = self.repository.list_sessions().await?;
        let conflicts = find_conflicts(draft, &sessions, exclude_id);
        if !conflicts.is_empty() {
            warn!(
                "Rejected session on {} {}: {} conflict(s)",
                draft.day,
                interval,
                conflicts.len()
            );
            return Err(TimetableError::Conflict(ConflictReport::new(conflicts)));
        }

        let id = match exclude_id {
            Some(id) => {
                self.repository.update(id, draft).await?;
                info!("Session updated: id={}, {} {}", id, draft.day, interval);
                id
            }
            None => {
                let id = self.repository.insert(draft).await?;
                info!("Session created: id={}, {} {}", id, draft.day, interval);
                id
            }
        };

        Ok(id)
    }

    /// Deletes a session. Removal never creates a conflict.
    pub async fn remove(&self, id: SessionId) -> TimetableResult<()> {
        let _guard = self.write_lock.lock().await;

        self.repository.delete(id).await?;
        info!("Session removed: id={}", id);

        Ok(())
    }
}
