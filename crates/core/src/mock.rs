use async_trait::async_trait;
use mockall::mock;

use crate::{
    errors::TimetableResult,
    models::session::{Session, SessionDraft, SessionId},
    repository::SessionRepository,
};

// Mock repository for testing
mock! {
    pub SessionRepo {}

    #[async_trait]
    impl SessionRepository for SessionRepo {
        async fn list_sessions(&self) -> TimetableResult<Vec<Session>>;

        async fn get(&self, id: SessionId) -> TimetableResult<Option<Session>>;

        async fn insert(&self, draft: &SessionDraft) -> TimetableResult<SessionId>;

        async fn update(&self, id: SessionId, draft: &SessionDraft) -> TimetableResult<()>;

        async fn delete(&self, id: SessionId) -> TimetableResult<()>;
    }
}
