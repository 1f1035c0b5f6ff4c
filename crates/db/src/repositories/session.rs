use crate::models::DbSession;
use async_trait::async_trait;
use chrono::Utc;
use eyre::{Result, WrapErr};
use sqlx::{Pool, Postgres};
use timetable_core::{
    errors::{TimetableError, TimetableResult},
    models::session::{Session, SessionDraft, SessionId},
    repository::SessionRepository,
};
use uuid::Uuid;

/// SQLSTATE raised when an exclusion constraint rejects a row.
const EXCLUSION_VIOLATION: &str = "23P01";

const SESSION_COLUMNS: &str = "id, subject_id, teacher_id, room_id, group_code, day, \
                               start_minute, end_minute, created_at, updated_at";

pub async fn create_session(pool: &Pool<Postgres>, draft: &SessionDraft) -> Result<DbSession> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating session: id={}, teacher={}, room={}, day={}, {}-{}",
        id,
        draft.teacher_id,
        draft.room_id,
        draft.day,
        draft.start,
        draft.end
    );

    let session = sqlx::query_as::<_, DbSession>(&format!(
        r#"
        INSERT INTO sessions (id, subject_id, teacher_id, room_id, group_code, day,
                              start_minute, end_minute, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
        RETURNING {}
        "#,
        SESSION_COLUMNS
    ))
    .bind(id)
    .bind(&draft.subject_id)
    .bind(draft.teacher_id.as_str())
    .bind(draft.room_id.as_str())
    .bind(&draft.group_code)
    .bind(draft.day.as_str())
    .bind(minute_column(draft.start.minutes()))
    .bind(minute_column(draft.end.minutes()))
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(session)
}

pub async fn get_session_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbSession>> {
    tracing::debug!("Getting session by id: {}", id);

    let session = sqlx::query_as::<_, DbSession>(&format!(
        "SELECT {} FROM sessions WHERE id = $1",
        SESSION_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(session)
}

pub async fn list_sessions(pool: &Pool<Postgres>) -> Result<Vec<DbSession>> {
    let sessions = sqlx::query_as::<_, DbSession>(&format!(
        "SELECT {} FROM sessions ORDER BY created_at ASC, id ASC",
        SESSION_COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    tracing::debug!("Listed {} sessions", sessions.len());
    Ok(sessions)
}

/// Returns `None` when no session has this id.
pub async fn update_session(
    pool: &Pool<Postgres>,
    id: Uuid,
    draft: &SessionDraft,
) -> Result<Option<DbSession>> {
    tracing::debug!("Updating session: id={}", id);

    let session = sqlx::query_as::<_, DbSession>(&format!(
        r#"
        UPDATE sessions
        SET subject_id = $2, teacher_id = $3, room_id = $4, group_code = $5, day = $6,
            start_minute = $7, end_minute = $8, updated_at = $9
        WHERE id = $1
        RETURNING {}
        "#,
        SESSION_COLUMNS
    ))
    .bind(id)
    .bind(&draft.subject_id)
    .bind(draft.teacher_id.as_str())
    .bind(draft.room_id.as_str())
    .bind(&draft.group_code)
    .bind(draft.day.as_str())
    .bind(minute_column(draft.start.minutes()))
    .bind(minute_column(draft.end.minutes()))
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?;

    Ok(session)
}

/// Returns whether a row was deleted.
pub async fn delete_session(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM sessions
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

fn minute_column(minutes: u16) -> i16 {
    // Grid minutes never exceed 21:00.
    minutes as i16
}

/// [`SessionRepository`] backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgSessionRepository {
    pool: Pool<Postgres>,
}

impl PgSessionRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Pool<Postgres> {
        &self.pool
    }
}

fn not_found(id: SessionId) -> TimetableError {
    TimetableError::NotFound(format!("Session with ID {} not found", id))
}

/// Maps a write failure, turning exclusion-constraint rejections into
/// `Concurrent` so callers can retry and get a detailed conflict report.
pub fn classify_write_error(report: eyre::Report) -> TimetableError {
    if let Some(sqlx::Error::Database(db_err)) = report.downcast_ref::<sqlx::Error>() {
        if db_err.code().as_deref() == Some(EXCLUSION_VIOLATION) {
            return TimetableError::Concurrent(db_err.message().to_string());
        }
    }
    TimetableError::Database(report)
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn list_sessions(&self) -> TimetableResult<Vec<Session>> {
        list_sessions(&self.pool)
            .await
            .wrap_err("Failed to list sessions")?
            .into_iter()
            .map(Session::try_from)
            .collect()
    }

    async fn get(&self, id: SessionId) -> TimetableResult<Option<Session>> {
        get_session_by_id(&self.pool, id.0)
            .await?
            .map(Session::try_from)
            .transpose()
    }

    async fn insert(&self, draft: &SessionDraft) -> TimetableResult<SessionId> {
        let row = create_session(&self.pool, draft)
            .await
            .map_err(classify_write_error)?;

        Ok(SessionId(row.id))
    }

    async fn update(&self, id: SessionId, draft: &SessionDraft) -> TimetableResult<()> {
        update_session(&self.pool, id.0, draft)
            .await
            .map_err(classify_write_error)?
            .ok_or_else(|| not_found(id))?;

        Ok(())
    }

    async fn delete(&self, id: SessionId) -> TimetableResult<()> {
        if delete_session(&self.pool, id.0).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}
