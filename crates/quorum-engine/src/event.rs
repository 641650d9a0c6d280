//! Busy events, attendee identifiers, and meeting requests.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::{QuorumError, Result};
use crate::timerange::TimeRange;

/// Opaque identifier for a meeting attendee (e.g., an email address or a
/// directory id). The resolver only ever compares and hashes these; no
/// identity beyond equality is assumed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct AttendeeId(String);

impl AttendeeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AttendeeId {
    fn from(id: String) -> Self {
        AttendeeId(id)
    }
}

impl From<&str> for AttendeeId {
    fn from(id: &str) -> Self {
        AttendeeId(id.to_string())
    }
}

impl fmt::Display for AttendeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A busy interval on somebody's calendar, plus the attendees it blocks.
///
/// Supplied by the caller as input; the resolver reads it and never retains
/// it. An event with no attendees is never blocking for any request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    /// When the event occupies the day clock.
    pub when: TimeRange,
    /// Who is busy during `when`.
    pub attendees: HashSet<AttendeeId>,
}

impl Event {
    pub fn new<I, A>(when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<AttendeeId>,
    {
        Event {
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this event makes any required attendee of `request` busy.
    ///
    /// Pure set-intersection: a single shared attendee is enough.
    pub fn blocks(&self, request: &MeetingRequest) -> bool {
        !self.attendees.is_disjoint(request.attendees())
    }
}

/// A request for a meeting window: who must attend and for how long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingRequest {
    attendees: HashSet<AttendeeId>,
    duration: i64,
}

impl MeetingRequest {
    /// Create a request for `duration` minutes with the given required
    /// attendees. The attendee set may be empty; the duration may exceed a
    /// day's length (such a request is simply never satisfiable).
    ///
    /// # Errors
    /// Returns [`QuorumError::InvalidRequest`] if `duration` is negative.
    pub fn new<I, A>(attendees: I, duration: i64) -> Result<Self>
    where
        I: IntoIterator<Item = A>,
        A: Into<AttendeeId>,
    {
        if duration < 0 {
            return Err(QuorumError::InvalidRequest(duration));
        }
        Ok(MeetingRequest {
            attendees: attendees.into_iter().map(Into::into).collect(),
            duration,
        })
    }

    /// The attendees that must all be free.
    pub fn attendees(&self) -> &HashSet<AttendeeId> {
        &self.attendees
    }

    /// Requested meeting length in minutes.
    pub fn duration(&self) -> i64 {
        self.duration
    }
}
