use std::fmt;

use serde::Serialize;

use crate::models::{
    session::Session,
    slot::{TimeSlot, Weekday},
};

/// Which resource a conflict double-books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConflictKind {
    Teacher,
    Room,
}

/// A clash between a candidate and one existing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub kind: ConflictKind,
    /// The existing session blocking the candidate.
    pub session: Session,
    pub day: Weekday,
    /// Start of the existing session's occupied range.
    pub start: TimeSlot,
    pub end: TimeSlot,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ConflictKind::Teacher => write!(
                f,
                "Teacher '{}' already teaches {} (group {}) on {} {}-{}",
                self.session.teacher_id,
                self.session.subject_id,
                self.session.group_code,
                self.day,
                self.start,
                self.end
            ),
            ConflictKind::Room => write!(
                f,
                "Room '{}' is already occupied by {} (group {}) on {} {}-{}",
                self.session.room_id,
                self.session.subject_id,
                self.session.group_code,
                self.day,
                self.start,
                self.end
            ),
        }
    }
}

/// Every conflict found for one candidate, in detection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConflictReport(Vec<Conflict>);

impl ConflictReport {
    pub fn new(conflicts: Vec<Conflict>) -> Self {
        ConflictReport(conflicts)
    }

    pub fn conflicts(&self) -> &[Conflict] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, conflict) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", conflict)?;
        }
        Ok(())
    }
}

impl IntoIterator for ConflictReport {
    type Item = Conflict;
    type IntoIter = std::vec::IntoIter<Conflict>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
