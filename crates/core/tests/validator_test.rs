use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use timetable_core::{
    find_conflicts,
    models::{
        conflict::ConflictKind,
        session::{Session, SessionDraft, SessionId},
        slot::{TimeSlot, Weekday},
    },
};

fn slot(s: &str) -> TimeSlot {
    s.parse().expect("valid slot")
}

fn draft(teacher: &str, room: &str, day: Weekday, start: &str, end: &str) -> SessionDraft {
    SessionDraft {
        subject_id: "MAT101".to_string(),
        teacher_id: teacher.into(),
        room_id: room.into(),
        group_code: "1ISA".to_string(),
        day,
        start: slot(start),
        end: slot(end),
    }
}

fn session(teacher: &str, room: &str, day: Weekday, start: &str, end: &str) -> Session {
    Session::from_draft(SessionId::new(), draft(teacher, room, day, start, end))
        .expect("valid session")
}

/// T1 in R1 on Monday from 09:00 to 10:00.
#[fixture]
fn monday_nine() -> Session {
    session("T1", "R1", Weekday::Monday, "09:00", "10:00")
}

fn kinds(conflicts: &[timetable_core::models::conflict::Conflict]) -> Vec<ConflictKind> {
    conflicts.iter().map(|c| c.kind).collect()
}

#[rstest]
fn test_same_teacher_other_room(monday_nine: Session) {
    let candidate = draft("T1", "R2", Weekday::Monday, "09:30", "10:30");

    let conflicts = find_conflicts(&candidate, [&monday_nine], None);

    assert_eq!(kinds(&conflicts), vec![ConflictKind::Teacher]);
    assert_eq!(conflicts[0].session, monday_nine);
    assert_eq!(conflicts[0].day, Weekday::Monday);
    assert_eq!(conflicts[0].start, slot("09:00"));
    assert_eq!(conflicts[0].end, slot("10:00"));
}

#[rstest]
fn test_same_room_other_teacher(monday_nine: Session) {
    let candidate = draft("T2", "R1", Weekday::Monday, "09:30", "10:30");

    let conflicts = find_conflicts(&candidate, [&monday_nine], None);

    assert_eq!(kinds(&conflicts), vec![ConflictKind::Room]);
}

#[rstest]
fn test_same_teacher_and_room_reports_both(monday_nine: Session) {
    let candidate = draft("T1", "R1", Weekday::Monday, "09:30", "10:30");

    let conflicts = find_conflicts(&candidate, [&monday_nine], None);

    assert_eq!(
        kinds(&conflicts),
        vec![ConflictKind::Teacher, ConflictKind::Room]
    );
    assert!(conflicts.iter().all(|c| c.session.id == monday_nine.id));
}

#[rstest]
fn test_unrelated_resources_never_conflict(monday_nine: Session) {
    let candidate = draft("T2", "R2", Weekday::Monday, "09:00", "10:00");

    assert!(find_conflicts(&candidate, [&monday_nine], None).is_empty());
}

#[rstest]
#[case("08:00", "09:00")]
#[case("10:00", "11:00")]
#[case("07:00", "08:30")]
fn test_touching_or_disjoint_intervals_do_not_conflict(
    monday_nine: Session,
    #[case] start: &str,
    #[case] end: &str,
) {
    let candidate = draft("T1", "R1", Weekday::Monday, start, end);

    assert!(find_conflicts(&candidate, [&monday_nine], None).is_empty());
}

#[rstest]
#[case(Weekday::Tuesday)]
#[case(Weekday::Saturday)]
fn test_different_days_never_conflict(monday_nine: Session, #[case] day: Weekday) {
    let candidate = draft("T1", "R1", day, "09:00", "10:00");

    assert!(find_conflicts(&candidate, [&monday_nine], None).is_empty());
}

#[test]
fn test_contained_interval_is_detected() {
    let long = session("T1", "R1", Weekday::Monday, "09:00", "12:00");
    let short = session("T1", "R9", Weekday::Monday, "10:00", "10:30");

    let inside = find_conflicts(&short.to_draft(), [&long], None);
    let around = find_conflicts(&long.to_draft(), [&short], None);

    assert_eq!(kinds(&inside), vec![ConflictKind::Teacher]);
    assert_eq!(kinds(&around), vec![ConflictKind::Teacher]);
}

#[rstest]
#[case("08:00", "11:00", "10:30", "12:00")]
#[case("09:00", "10:00", "09:00", "10:00")]
#[case("13:00", "15:30", "07:00", "13:30")]
fn test_teacher_conflict_is_symmetric(
    #[case] a_start: &str,
    #[case] a_end: &str,
    #[case] b_start: &str,
    #[case] b_end: &str,
) {
    let a = session("T1", "R1", Weekday::Thursday, a_start, a_end);
    let b = session("T1", "R2", Weekday::Thursday, b_start, b_end);

    let a_against_b = find_conflicts(&a.to_draft(), [&b], None);
    let b_against_a = find_conflicts(&b.to_draft(), [&a], None);

    assert_eq!(kinds(&a_against_b), vec![ConflictKind::Teacher]);
    assert_eq!(kinds(&b_against_a), vec![ConflictKind::Teacher]);
}

#[rstest]
fn test_excluded_session_does_not_conflict_with_itself(monday_nine: Session) {
    let unchanged = monday_nine.to_draft();

    assert_eq!(find_conflicts(&unchanged, [&monday_nine], None).len(), 2);
    assert!(find_conflicts(&unchanged, [&monday_nine], Some(monday_nine.id)).is_empty());
}

#[rstest]
fn test_exclusion_is_by_identity(monday_nine: Session) {
    // Same fields under another id still blocks the edit.
    let twin = Session {
        id: SessionId::new(),
        ..monday_nine.clone()
    };

    let conflicts = find_conflicts(
        &monday_nine.to_draft(),
        [&monday_nine, &twin],
        Some(monday_nine.id),
    );

    assert_eq!(conflicts.len(), 2);
    assert!(conflicts.iter().all(|c| c.session.id == twin.id));
}

#[test]
fn test_conflicts_follow_snapshot_order() {
    let existing = vec![
        session("T1", "R5", Weekday::Friday, "08:00", "10:00"),
        session("T9", "R9", Weekday::Friday, "08:00", "10:00"),
        session("T7", "R1", Weekday::Friday, "09:30", "11:00"),
        session("T1", "R1", Weekday::Friday, "09:00", "09:30"),
    ];
    let candidate = draft("T1", "R1", Weekday::Friday, "09:00", "10:00");

    let conflicts = find_conflicts(&candidate, &existing, None);

    let found: Vec<(SessionId, ConflictKind)> =
        conflicts.iter().map(|c| (c.session.id, c.kind)).collect();
    assert_eq!(
        found,
        vec![
            (existing[0].id, ConflictKind::Teacher),
            (existing[2].id, ConflictKind::Room),
            (existing[3].id, ConflictKind::Teacher),
            (existing[3].id, ConflictKind::Room),
        ]
    );
}

#[test]
fn test_find_conflicts_is_idempotent() {
    let existing = vec![
        session("T1", "R1", Weekday::Monday, "09:00", "10:00"),
        session("T2", "R1", Weekday::Monday, "10:00", "11:30"),
    ];
    let candidate = draft("T1", "R1", Weekday::Monday, "09:30", "10:30");

    let first = find_conflicts(&candidate, &existing, None);
    let second = find_conflicts(&candidate, &existing, None);

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
}

#[test]
fn test_conflict_message() {
    let existing = session("T1", "A01", Weekday::Wednesday, "11:00", "12:30");
    let candidate = draft("T1", "A01", Weekday::Wednesday, "12:00", "13:00");

    let messages: Vec<String> = find_conflicts(&candidate, [&existing], None)
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(
        messages,
        vec![
            "Teacher 'T1' already teaches MAT101 (group 1ISA) on WEDNESDAY 11:00-12:30".to_string(),
            "Room 'A01' is already occupied by MAT101 (group 1ISA) on WEDNESDAY 11:00-12:30"
                .to_string(),
        ]
    );
}

#[test]
fn test_empty_snapshot_has_no_conflicts() {
    let candidate = draft("T1", "R1", Weekday::Monday, "07:00", "21:00");
    let existing: Vec<Session> = Vec::new();

    assert!(find_conflicts(&candidate, &existing, None).is_empty());
}

#[rstest]
fn test_inverted_stored_session_still_overlaps(monday_nine: Session) {
    // Hand-built sessions bypass the checked constructors.
    let inverted = Session {
        start: slot("12:00"),
        end: slot("08:00"),
        ..monday_nine
    };
    let candidate = draft("T1", "R1", Weekday::Monday, "07:00", "13:00");

    let conflicts = find_conflicts(&candidate, [&inverted], None);

    assert_eq!(kinds(&conflicts), vec![ConflictKind::Teacher, ConflictKind::Room]);
}
