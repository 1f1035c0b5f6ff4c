//! # Session conflict detection
//!
//! A pure scan over a snapshot of existing sessions. Two sessions clash when
//! they fall on the same weekday, their half-open intervals overlap
//! (`a.start < b.end && a.end > b.start`) and they share a teacher or a room.
//!
//! The teacher and room checks are independent, so one existing session that
//! shares both resources with the candidate yields two conflicts.

use crate::models::{
    conflict::{Conflict, ConflictKind},
    session::{Session, SessionDraft, SessionId},
};

/// Finds every existing session the candidate would double-book.
///
/// `exclude_id` skips one session by identity, which is how an edit avoids
/// clashing with its own stored value. The candidate's interval is expected
/// to be valid already (`start < end`); check it with
/// [`SessionDraft::interval`] first.
///
/// # Example
///
/// ```
/// use timetable_core::models::session::{Session, SessionDraft, SessionId};
/// use timetable_core::validator::find_conflicts;
///
/// # fn example(draft: &SessionDraft, sessions: &[Session], editing: Option<SessionId>) {
/// let conflicts = find_conflicts(draft, sessions, editing);
/// for conflict in &conflicts {
///     println!("{}", conflict);
/// }
/// # }
/// ```
pub fn find_conflicts<'a, I>(
    candidate: &SessionDraft,
    existing_sessions: I,
    exclude_id: Option<SessionId>,
) -> Vec<Conflict>
where
    I: IntoIterator<Item = &'a Session>,
{
    let mut conflicts = Vec::new();

    for session in existing_sessions {
        if Some(session.id) == exclude_id || session.day != candidate.day {
            continue;
        }

        if !overlaps(candidate, session) {
            continue;
        }

        if session.teacher_id == candidate.teacher_id {
            conflicts.push(conflict(ConflictKind::Teacher, session));
        }

        if session.room_id == candidate.room_id {
            conflicts.push(conflict(ConflictKind::Room, session));
        }
    }

    conflicts
}

fn overlaps(candidate: &SessionDraft, session: &Session) -> bool {
    candidate.start < session.end && candidate.end > session.start
}

fn conflict(kind: ConflictKind, session: &Session) -> Conflict {
    Conflict {
        kind,
        session: session.clone(),
        day: session.day,
        start: session.start,
        end: session.end,
    }
}
