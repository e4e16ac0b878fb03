//! Minute-of-day time ranges and the calendar input types.
//!
//! All times are whole minutes since midnight within a single day. A
//! [`TimeRange`] is half-open: `[start, end)`. The day spans minute `0`
//! (`START_OF_DAY`) through minute `1439` (`END_OF_DAY`); `1440` is the
//! exclusive day boundary.

use std::collections::HashSet;
use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// Last valid minute of the day (23:59).
pub const END_OF_DAY: u32 = 1439;

/// Exclusive upper bound on minute-of-day values.
pub const MINUTES_PER_DAY: u32 = 1440;

/// A half-open interval `[start, end)` in minutes since midnight.
///
/// Invariant: `start <= end <= 1440`. The checked constructors enforce it;
/// code that builds a `TimeRange` from literal fields is responsible for
/// upholding it. A zero-length range is valid but never satisfies a
/// positive-duration meeting request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: u32,
    pub end: u32,
}

impl TimeRange {
    /// The full day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        end: MINUTES_PER_DAY,
    };

    /// Create a range from start and end minutes, validating the invariant.
    ///
    /// # Errors
    /// Returns [`SlotError::InvalidRange`] if `start > end` and
    /// [`SlotError::OutOfBounds`] if `end` exceeds the day boundary.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start > end {
            return Err(SlotError::InvalidRange { start, end });
        }
        if end > MINUTES_PER_DAY {
            return Err(SlotError::OutOfBounds { start, end });
        }
        Ok(TimeRange { start, end })
    }

    /// Create a range from a start minute and a duration in minutes.
    ///
    /// # Errors
    /// Returns [`SlotError::OutOfBounds`] if the range would extend past the
    /// day boundary.
    pub fn from_start_duration(start: u32, duration: u32) -> Result<Self> {
        Self::new(start, start + duration)
    }

    /// Create a range from wall-clock times, truncated to whole minutes.
    ///
    /// An event that runs to the end of the day cannot be expressed this way
    /// (23:59 maps to minute 1439, not 1440); use [`TimeRange::new`] with an
    /// explicit end of `MINUTES_PER_DAY` for that case.
    ///
    /// # Errors
    /// Returns [`SlotError::InvalidRange`] if `start` is after `end`.
    pub fn between(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        Self::new(minute_of_day(start), minute_of_day(end))
    }

    /// Length of the range in minutes.
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// Whether the range has zero length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `minute` falls inside the half-open interval.
    pub fn contains(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Whether two ranges overlap.
    ///
    /// Two ranges overlap iff `a.start < b.end && b.start < a.end`; adjacent
    /// ranges where one ends exactly when the other starts do NOT overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:02}:{:02}, {:02}:{:02})",
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60
        )
    }
}

/// Convert a wall-clock time to its minute-of-day, truncating seconds.
pub fn minute_of_day(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

/// A pre-existing calendar event.
///
/// Constructed by the caller before a query runs and never mutated by the
/// engine. `when.start > when.end` is a precondition violation; use the
/// checked [`TimeRange`] constructors to rule it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub when: TimeRange,
    pub attendees: HashSet<String>,
}

impl Event {
    pub fn new<I, S>(name: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Event {
            name: name.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }
}

/// A request to schedule a meeting of `duration` minutes.
///
/// `attendees` must all be free for a candidate slot to qualify;
/// `optional_attendees` are accommodated only when doing so still leaves a
/// viable slot. The two sets may overlap; no special handling is needed
/// beyond relevance classification.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeetingRequest {
    pub attendees: HashSet<String>,
    pub optional_attendees: HashSet<String>,
    pub duration: u32,
}

impl MeetingRequest {
    pub fn new<I, J, S, T>(attendees: I, optional_attendees: J, duration: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        MeetingRequest {
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: optional_attendees.into_iter().map(Into::into).collect(),
            duration,
        }
    }
}
