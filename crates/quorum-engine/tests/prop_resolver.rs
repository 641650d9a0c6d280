//! Property-based tests for the meeting-window resolver using proptest.
//!
//! These verify invariants that should hold for *any* day of events and any
//! request, not just the specific examples in `resolver_tests.rs`.

use proptest::prelude::*;
use quorum_engine::event::{Event, MeetingRequest};
use quorum_engine::resolver::find_meeting_windows;
use quorum_engine::timerange::{TimeRange, MINUTES_PER_DAY};

// ---------------------------------------------------------------------------
// Strategies — generate events and requests over a small attendee pool
// ---------------------------------------------------------------------------

const ATTENDEES: &[&str] = &["alice", "bob", "carol", "dave", "erin"];

fn arb_event() -> impl Strategy<Value = Event> {
    (
        0i64..MINUTES_PER_DAY,
        0i64..=480,
        prop::collection::hash_set(0..ATTENDEES.len(), 0..=2),
    )
        .prop_map(|(start, len, who)| {
            let end = (start + len).min(MINUTES_PER_DAY);
            Event::new(
                TimeRange::new(start, end).unwrap(),
                who.into_iter().map(|i| ATTENDEES[i]),
            )
        })
}

fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(arb_event(), 0..=12)
}

fn arb_request(min_attendees: usize) -> impl Strategy<Value = MeetingRequest> {
    (
        prop::collection::hash_set(0..ATTENDEES.len(), min_attendees..=3),
        0i64..=1500,
    )
        .prop_map(|(who, duration)| {
            MeetingRequest::new(who.into_iter().map(|i| ATTENDEES[i]), duration).unwrap()
        })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The time ranges of the events that actually make a required attendee busy.
fn blocking_ranges(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    events
        .iter()
        .filter(|e| e.blocks(request) && e.when.duration() > 0)
        .map(|e| e.when)
        .collect()
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: windows are sorted, disjoint, and separated by busy time
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn windows_are_sorted_and_disjoint(events in arb_events(), request in arb_request(0)) {
        let windows = find_meeting_windows(&events, &request);

        for pair in windows.windows(2) {
            // Strictly separated: adjacent windows would be one maximal
            // window, not two.
            prop_assert!(pair[0].end() < pair[1].start());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: every window fits the requested duration
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn windows_fit_the_request(events in arb_events(), request in arb_request(1)) {
        for window in find_meeting_windows(&events, &request) {
            prop_assert!(window.duration() >= request.duration());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: windows are actually free for everyone required
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn no_blocking_event_overlaps_a_window(events in arb_events(), request in arb_request(0)) {
        let windows = find_meeting_windows(&events, &request);
        let busy = blocking_ranges(&events, &request);

        for window in &windows {
            for range in &busy {
                prop_assert!(
                    !window.overlaps(range),
                    "window [{}, {}) overlaps busy [{}, {})",
                    window.start(), window.end(), range.start(), range.end(),
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: windows are maximal — each edge touches busy time or a day edge
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn windows_are_maximal(events in arb_events(), request in arb_request(1)) {
        let windows = find_meeting_windows(&events, &request);
        let busy = blocking_ranges(&events, &request);

        for window in &windows {
            let start_pinned =
                window.start() == 0 || busy.iter().any(|r| r.contains(window.start() - 1));
            let end_pinned =
                window.end() == MINUTES_PER_DAY || busy.iter().any(|r| r.contains(window.end()));

            prop_assert!(start_pinned, "window start {} is extendable", window.start());
            prop_assert!(end_pinned, "window end {} is extendable", window.end());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: irrelevant events never affect the result
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn dropping_irrelevant_events_changes_nothing(
        events in arb_events(),
        request in arb_request(0),
    ) {
        let relevant: Vec<Event> = events
            .iter()
            .filter(|e| e.blocks(&request))
            .cloned()
            .collect();

        prop_assert_eq!(
            find_meeting_windows(&events, &request),
            find_meeting_windows(&relevant, &request)
        );
    }
}

// ---------------------------------------------------------------------------
// Property 6: a request with no attendees is vacuously free all day
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn empty_attendee_request_gets_the_whole_day(events in arb_events(), duration in 0i64..=2000) {
        let request = MeetingRequest::new::<_, &str>([], duration).unwrap();

        prop_assert_eq!(
            find_meeting_windows(&events, &request),
            vec![TimeRange::WHOLE_DAY]
        );
    }
}

// ---------------------------------------------------------------------------
// Property 7: a request longer than the day is never satisfiable
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn oversized_duration_yields_no_windows(events in arb_events(), extra in 1i64..=1000) {
        let request = MeetingRequest::new(["alice"], MINUTES_PER_DAY + extra).unwrap();

        prop_assert!(find_meeting_windows(&events, &request).is_empty());
    }
}
