//! Detect events that clash with a proposed meeting window.
//!
//! The scheduling-side complement of the resolver: given a window a caller
//! wants to book, list the events that make a required attendee busy during
//! it. Adjacent events (ending exactly when the window starts, or starting
//! exactly when it ends) are NOT conflicts.

use serde::Serialize;

use crate::event::{Event, MeetingRequest};
use crate::timerange::TimeRange;

/// A detected clash between a proposed window and an existing event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    /// The event a required attendee is already booked into.
    pub event: Event,
    /// How many minutes of the proposed window it covers.
    pub overlap_minutes: i64,
}

/// Find every event that both blocks a required attendee and overlaps the
/// proposed window.
///
/// The overlap length is `min(ends) - max(starts)`. Events whose attendees do
/// not intersect the request's are never conflicts, regardless of timing.
pub fn find_conflicts(
    events: &[Event],
    request: &MeetingRequest,
    proposed: TimeRange,
) -> Vec<Conflict> {
    events
        .iter()
        .filter(|event| event.blocks(request) && event.when.overlaps(&proposed))
        .map(|event| {
            let overlap_start = event.when.start().max(proposed.start());
            let overlap_end = event.when.end().min(proposed.end());
            Conflict {
                event: event.clone(),
                overlap_minutes: overlap_end - overlap_start,
            }
        })
        .collect()
}
