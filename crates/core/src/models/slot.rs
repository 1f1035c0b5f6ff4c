//! Weekdays and the half-hour slot grid sessions are placed on.

use std::{fmt, str::FromStr};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::errors::{TimetableError, TimetableResult};

/// Number of slots on the grid, `07:00` through `21:00` inclusive.
pub const SLOT_COUNT: usize = 29;

const FIRST_SLOT_MINUTES: u16 = 7 * 60;
const SLOT_MINUTES: u16 = 30;

/// A time of day on the fixed half-hour grid.
///
/// Stored as an index into the grid, so ordering and overlap arithmetic are
/// plain integer comparisons. Values off the grid cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(u8);

impl TimeSlot {
    pub const FIRST: TimeSlot = TimeSlot(0);
    pub const LAST: TimeSlot = TimeSlot((SLOT_COUNT - 1) as u8);

    pub fn from_index(index: usize) -> TimetableResult<Self> {
        if index < SLOT_COUNT {
            Ok(TimeSlot(index as u8))
        } else {
            Err(TimetableError::Validation(format!(
                "Slot index {} is outside the grid (0..{})",
                index, SLOT_COUNT
            )))
        }
    }

    /// Builds a slot from minutes since midnight.
    pub fn from_minutes(minutes: u16) -> TimetableResult<Self> {
        let on_grid = minutes >= FIRST_SLOT_MINUTES
            && (minutes - FIRST_SLOT_MINUTES) % SLOT_MINUTES == 0
            && usize::from((minutes - FIRST_SLOT_MINUTES) / SLOT_MINUTES) < SLOT_COUNT;

        if !on_grid {
            return Err(TimetableError::Validation(format!(
                "{:02}:{:02} is not a half-hour slot between {} and {}",
                minutes / 60,
                minutes % 60,
                Self::FIRST,
                Self::LAST
            )));
        }

        Ok(TimeSlot(((minutes - FIRST_SLOT_MINUTES) / SLOT_MINUTES) as u8))
    }

    pub fn from_hm(hour: u8, minute: u8) -> TimetableResult<Self> {
        if minute >= 60 {
            return Err(TimetableError::Validation(format!(
                "Invalid minute value: {}",
                minute
            )));
        }
        Self::from_minutes(u16::from(hour) * 60 + u16::from(minute))
    }

    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        FIRST_SLOT_MINUTES + u16::from(self.0) * SLOT_MINUTES
    }

    pub fn hour(self) -> u8 {
        (self.minutes() / 60) as u8
    }

    pub fn minute(self) -> u8 {
        (self.minutes() % 60) as u8
    }

    pub fn to_naive_time(self) -> NaiveTime {
        // Every grid value is a valid time of day.
        NaiveTime::from_hms_opt(u32::from(self.hour()), u32::from(self.minute()), 0)
            .unwrap_or_default()
    }

    /// Every slot on the grid in ascending order.
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (0..SLOT_COUNT as u8).map(TimeSlot)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeSlot {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimetableError::Validation(format!("Invalid time of day: '{}'", s));

        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(invalid());
        }
        if !digits(hour) || !digits(minute) {
            return Err(invalid());
        }
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;

        Self::from_hm(hour, minute)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = TimetableError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

/// School days, Monday through Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "MONDAY",
            Weekday::Tuesday => "TUESDAY",
            Weekday::Wednesday => "WEDNESDAY",
            Weekday::Thursday => "THURSDAY",
            Weekday::Friday => "FRIDAY",
            Weekday::Saturday => "SATURDAY",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Weekday::ALL
            .into_iter()
            .find(|day| day.as_str() == upper || day.as_str()[..3] == upper)
            .ok_or_else(|| TimetableError::Validation(format!("Unknown weekday: '{}'", s)))
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
        }
    }
}

/// A validated half-open interval `[start, end)` on the slot grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SlotRange {
    start: TimeSlot,
    end: TimeSlot,
}

impl SlotRange {
    pub fn new(start: TimeSlot, end: TimeSlot) -> TimetableResult<Self> {
        if start >= end {
            return Err(TimetableError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> TimeSlot {
        self.start
    }

    pub fn end(&self) -> TimeSlot {
        self.end
    }

    /// Touching ranges (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &SlotRange) -> bool {
        self.start < other.end && self.end > other.start
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }
}

impl fmt::Display for SlotRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
