//! # Timetable Core
//!
//! Domain types and rules for placing weekly class sessions without
//! double-booking a teacher or a room.
//!
//! ## Layout
//!
//! - **Models**: sessions, the half-hour slot grid, weekdays and conflicts
//! - **Validator**: the pure conflict scan, [`validator::find_conflicts`]
//! - **Repository**: the storage port plus an in-memory implementation
//! - **Scheduler**: check-then-commit staging of sessions through a repository
//! - **Timetable**: per-group, per-teacher and per-room weekly views

/// Error type shared by every crate in the workspace
pub mod errors;
/// Mock repository for interaction tests
pub mod mock;
/// Sessions, slots, weekdays and conflict records
pub mod models;
/// Session storage port
pub mod repository;
/// Conflict-checked writes
pub mod scheduler;
pub mod timetable;
/// Conflict detection
pub mod validator;

pub use errors::{TimetableError, TimetableResult};
pub use scheduler::Scheduler;
pub use validator::find_conflicts;
