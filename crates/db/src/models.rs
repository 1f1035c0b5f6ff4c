use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use timetable_core::{
    errors::TimetableError,
    models::{
        session::{Session, SessionId},
        slot::TimeSlot,
    },
};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSession {
    pub id: Uuid,
    pub subject_id: String,
    pub teacher_id: String,
    pub room_id: String,
    pub group_code: String,
    pub day: String,
    pub start_minute: i16,
    pub end_minute: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn slot_from_column(minutes: i16) -> Result<TimeSlot, TimetableError> {
    let minutes = u16::try_from(minutes)
        .map_err(|_| TimetableError::Validation(format!("Negative slot minute: {}", minutes)))?;
    TimeSlot::from_minutes(minutes)
}

impl TryFrom<DbSession> for Session {
    type Error = TimetableError;

    fn try_from(row: DbSession) -> Result<Self, Self::Error> {
        Ok(Session {
            id: SessionId(row.id),
            subject_id: row.subject_id,
            teacher_id: row.teacher_id.into(),
            room_id: row.room_id.into(),
            group_code: row.group_code,
            day: row.day.parse()?,
            start: slot_from_column(row.start_minute)?,
            end: slot_from_column(row.end_minute)?,
        })
    }
}
