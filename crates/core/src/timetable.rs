//! Weekly timetable views over a session snapshot, ordered by weekday and
//! start time.

use crate::models::session::{RoomId, Session, TeacherId};

pub fn group_timetable<'a, I>(sessions: I, group_code: &str) -> Vec<&'a Session>
where
    I: IntoIterator<Item = &'a Session>,
{
    weekly(sessions, |s| s.group_code == group_code)
}

pub fn teacher_timetable<'a, I>(sessions: I, teacher_id: &TeacherId) -> Vec<&'a Session>
where
    I: IntoIterator<Item = &'a Session>,
{
    weekly(sessions, |s| &s.teacher_id == teacher_id)
}

pub fn room_timetable<'a, I>(sessions: I, room_id: &RoomId) -> Vec<&'a Session>
where
    I: IntoIterator<Item = &'a Session>,
{
    weekly(sessions, |s| &s.room_id == room_id)
}

fn weekly<'a, I, F>(sessions: I, keep: F) -> Vec<&'a Session>
where
    I: IntoIterator<Item = &'a Session>,
    F: Fn(&Session) -> bool,
{
    let mut selected: Vec<&Session> = sessions.into_iter().filter(|&s| keep(s)).collect();
    selected.sort_by_key(|s| (s.day, s.start, s.end));
    selected
}
