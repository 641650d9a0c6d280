//! Resolve free meeting windows from a day's events.
//!
//! Filters the events down to those that block a required attendee, sorts
//! their time ranges by start, then sweeps across the day with a busy-until
//! watermark, emitting every maximal gap long enough for the request.

use crate::event::{Event, MeetingRequest};
use crate::timerange::{TimeRange, MINUTES_PER_DAY, START_OF_DAY};

/// Find every maximal window in which all required attendees are free for at
/// least the requested duration.
///
/// Returns windows sorted by start, non-overlapping, each bounded on both
/// sides by a blocking event or the edge of the day. A request with no
/// attendees is vacuously satisfied by the whole day; a request longer than
/// the day can never be satisfied. The empty result is a valid outcome, not
/// an error.
pub fn find_meeting_windows(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    if request.attendees().is_empty() {
        return vec![TimeRange::WHOLE_DAY];
    }

    if request.duration() > MINUTES_PER_DAY {
        return Vec::new();
    }

    // Only events that make a required attendee busy matter; everything else
    // is ignored even when it overlaps a blocking event in time. An event
    // occupying zero minutes blocks nobody and would otherwise split a
    // maximal window in two.
    let mut busy: Vec<TimeRange> = events
        .iter()
        .filter(|event| event.blocks(request) && event.when.duration() > 0)
        .map(|event| event.when)
        .collect();

    if busy.is_empty() {
        return vec![TimeRange::WHOLE_DAY];
    }

    busy.sort();

    let mut windows = Vec::new();
    let mut watermark = START_OF_DAY;

    for range in &busy {
        push_window(&mut windows, watermark, range.start(), request.duration());
        // The busy frontier is the running maximum of ends, not the end of
        // the most recent range; nested and overlapping ranges must not pull
        // it backwards.
        watermark = watermark.max(range.end());
    }

    // Trailing gap between the busy frontier and the end of the day.
    push_window(&mut windows, watermark, MINUTES_PER_DAY, request.duration());

    windows
}

/// Find the earliest window satisfying the request, if any exists.
pub fn find_first_window(events: &[Event], request: &MeetingRequest) -> Option<TimeRange> {
    find_meeting_windows(events, request).into_iter().next()
}

/// Keep the gap `[start, end)` as a candidate window if it is non-empty and
/// long enough. Zero-length gaps (back-to-back events) are never windows,
/// even for a zero-duration request.
fn push_window(windows: &mut Vec<TimeRange>, start: i64, end: i64, min_duration: i64) {
    if start < end && end - start >= min_duration {
        windows.push(TimeRange::new_unchecked(start, end));
    }
}
