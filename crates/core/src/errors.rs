use thiserror::Error;

use crate::models::{conflict::ConflictReport, slot::TimeSlot};

#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid interval: start {start} must be before end {end}")]
    InvalidInterval { start: TimeSlot, end: TimeSlot },

    #[error("Schedule conflict: {0}")]
    Conflict(ConflictReport),

    #[error("Concurrent modification: {0}")]
    Concurrent(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl TimetableError {
    /// Conflicts carried by a `Conflict` error, empty for every other variant.
    pub fn conflicts(&self) -> &[crate::models::conflict::Conflict] {
        match self {
            TimetableError::Conflict(report) => report.conflicts(),
            _ => &[],
        }
    }
}

pub type TimetableResult<T> = Result<T, TimetableError>;
