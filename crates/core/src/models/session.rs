use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::{TimetableError, TimetableResult},
    models::slot::{SlotRange, TimeSlot, Weekday},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        SessionId(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for SessionId {
    fn from(id: Uuid) -> Self {
        SessionId(id)
    }
}

macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                $name(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                $name(id)
            }
        }
    };
}

resource_id!(
    /// Employee number of a teacher.
    TeacherId
);
resource_id!(
    /// Room code, e.g. `A01`.
    RoomId
);

/// A scheduled, weekly recurring class.
///
/// Deserializing checks `start < end` the same way [`Session::from_draft`]
/// does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct Session {
    pub id: SessionId,
    pub subject_id: String,
    pub teacher_id: TeacherId,
    pub room_id: RoomId,
    pub group_code: String,
    pub day: Weekday,
    pub start: TimeSlot,
    pub end: TimeSlot,
}

impl Session {
    /// Materializes a draft under the given id, rejecting inverted intervals.
    pub fn from_draft(id: SessionId, draft: SessionDraft) -> TimetableResult<Self> {
        draft.interval()?;
        Ok(Self {
            id,
            subject_id: draft.subject_id,
            teacher_id: draft.teacher_id,
            room_id: draft.room_id,
            group_code: draft.group_code,
            day: draft.day,
            start: draft.start,
            end: draft.end,
        })
    }

    pub fn interval(&self) -> TimetableResult<SlotRange> {
        SlotRange::new(self.start, self.end)
    }

    pub fn to_draft(&self) -> SessionDraft {
        SessionDraft {
            subject_id: self.subject_id.clone(),
            teacher_id: self.teacher_id.clone(),
            room_id: self.room_id.clone(),
            group_code: self.group_code.clone(),
            day: self.day,
            start: self.start,
            end: self.end,
        }
    }
}

#[derive(Deserialize)]
struct SessionRecord {
    id: SessionId,
    subject_id: String,
    teacher_id: TeacherId,
    room_id: RoomId,
    group_code: String,
    day: Weekday,
    start: TimeSlot,
    end: TimeSlot,
}

impl TryFrom<SessionRecord> for Session {
    type Error = TimetableError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        let draft = SessionDraft {
            subject_id: record.subject_id,
            teacher_id: record.teacher_id,
            room_id: record.room_id,
            group_code: record.group_code,
            day: record.day,
            start: record.start,
            end: record.end,
        };
        Session::from_draft(record.id, draft)
    }
}

/// The fields of a session as entered on a form, before an id is assigned.
///
/// `start` and `end` are picked independently, so the draft may hold an
/// inverted interval until [`SessionDraft::interval`] is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDraft {
    pub subject_id: String,
    pub teacher_id: TeacherId,
    pub room_id: RoomId,
    pub group_code: String,
    pub day: Weekday,
    pub start: TimeSlot,
    pub end: TimeSlot,
}

impl SessionDraft {
    pub fn interval(&self) -> TimetableResult<SlotRange> {
        SlotRange::new(self.start, self.end)
    }
}
