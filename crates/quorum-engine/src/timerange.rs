//! Minute-granularity time ranges on a single-day clock.
//!
//! All scheduling in this crate happens in minutes since midnight, `0..1440`.
//! Ranges are half-open (`start` inclusive, `end` exclusive) so that
//! back-to-back events share a boundary minute without overlapping.

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

use crate::error::{QuorumError, Result};

/// First minute of the day clock.
pub const START_OF_DAY: i64 = 0;

/// Last minute of the day clock (inclusive).
pub const END_OF_DAY: i64 = 1439;

/// Total minutes in a day; the exclusive upper bound of the day clock.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Convert a wall-clock time into minutes since midnight. Seconds truncate.
pub fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// An immutable half-open span of minutes within one day.
///
/// Ordering is lexicographic over `(start, end)`, which is exactly the
/// by-start-ascending order the resolver sweeps in (ties broken by end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TimeRange {
    start: i64,
    end: i64,
}

impl TimeRange {
    /// The range covering the entire day (duration 1440).
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        end: MINUTES_PER_DAY,
    };

    /// Create a half-open range from `start` (inclusive) to `end` (exclusive).
    ///
    /// # Errors
    /// Returns [`QuorumError::InvalidTimeRange`] unless
    /// `0 <= start <= end <= 1440`.
    pub fn new(start: i64, end: i64) -> Result<Self> {
        if start < START_OF_DAY || start > end || end > MINUTES_PER_DAY {
            return Err(QuorumError::InvalidTimeRange { start, end });
        }
        Ok(TimeRange { start, end })
    }

    /// Create a range whose last minute is given inclusively; the stored
    /// exclusive end is `last + 1`.
    pub fn from_start_end_inclusive(start: i64, last: i64) -> Result<Self> {
        Self::new(start, last + 1)
    }

    /// Create a range from a start minute and a duration in minutes.
    pub fn from_start_duration(start: i64, duration: i64) -> Result<Self> {
        Self::new(start, start + duration)
    }

    /// Construct without validation. Callers must guarantee the bounds
    /// invariant already holds.
    pub(crate) fn new_unchecked(start: i64, end: i64) -> Self {
        debug_assert!(START_OF_DAY <= start && start <= end && end <= MINUTES_PER_DAY);
        TimeRange { start, end }
    }

    /// First minute of the range (inclusive).
    pub fn start(&self) -> i64 {
        self.start
    }

    /// One past the last minute of the range (exclusive).
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Length of the range in minutes.
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether the two ranges share at least one minute.
    ///
    /// Adjacent ranges (one ending exactly where the other starts) do NOT
    /// overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `minute` falls inside the range (`start <= minute < end`).
    pub fn contains(&self, minute: i64) -> bool {
        self.start <= minute && minute < self.end
    }
}
