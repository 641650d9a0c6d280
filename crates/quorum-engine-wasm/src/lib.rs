//! WASM bindings for quorum-engine.
//!
//! Exposes meeting-window resolution and conflict detection to JavaScript via
//! `wasm-bindgen`. All complex types are passed as JSON strings; times are
//! minutes on the single-day clock (0..1440).
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p quorum-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/quorum-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/quorum_engine_wasm.wasm
//! ```

use quorum_engine::{find_conflicts, find_meeting_windows, Event, MeetingRequest, TimeRange};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Input format for events passed from JavaScript.
#[derive(Deserialize)]
struct EventInput {
    start: i64,
    end: i64,
    attendees: Vec<String>,
}

/// Input format for the meeting request.
#[derive(Deserialize)]
struct RequestInput {
    attendees: Vec<String>,
    duration_minutes: i64,
}

#[derive(Serialize)]
struct WindowDto {
    start: i64,
    end: i64,
    duration_minutes: i64,
}

impl From<&TimeRange> for WindowDto {
    fn from(r: &TimeRange) -> Self {
        Self {
            start: r.start(),
            end: r.end(),
            duration_minutes: r.duration(),
        }
    }
}

#[derive(Serialize)]
struct ConflictDto {
    start: i64,
    end: i64,
    attendees: Vec<String>,
    overlap_minutes: i64,
}

// ---------------------------------------------------------------------------
// Helpers: parse JSON inputs through the validating core constructors
// ---------------------------------------------------------------------------

/// Convert a JSON array of `{start, end, attendees}` objects into `Vec<Event>`.
fn parse_events_json(json: &str) -> Result<Vec<Event>, JsValue> {
    let inputs: Vec<EventInput> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid events JSON: {}", e)))?;

    inputs
        .into_iter()
        .map(|input| {
            let when = TimeRange::new(input.start, input.end)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(Event::new(when, input.attendees))
        })
        .collect()
}

/// Convert a JSON `{attendees, duration_minutes}` object into a `MeetingRequest`.
fn parse_request_json(json: &str) -> Result<MeetingRequest, JsValue> {
    let input: RequestInput = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid request JSON: {}", e)))?;

    MeetingRequest::new(input.attendees, input.duration_minutes)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find every maximal window in which all required attendees are free.
///
/// `events_json` must be a JSON array of `{start, end, attendees}` objects;
/// `request_json` a `{attendees, duration_minutes}` object. Returns a JSON
/// string containing an array of `{start, end, duration_minutes}` objects,
/// sorted by start.
#[wasm_bindgen(js_name = "findMeetingWindows")]
pub fn find_meeting_windows_js(events_json: &str, request_json: &str) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    let request = parse_request_json(request_json)?;

    let windows = find_meeting_windows(&events, &request);
    let dtos: Vec<WindowDto> = windows.iter().map(WindowDto::from).collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Find the earliest window satisfying the request.
///
/// Returns a JSON `{start, end, duration_minutes}` object, or the JSON
/// literal `null` when nothing fits.
#[wasm_bindgen(js_name = "findFirstWindow")]
pub fn find_first_window_js(events_json: &str, request_json: &str) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    let request = parse_request_json(request_json)?;

    let first = quorum_engine::find_first_window(&events, &request);
    let dto = first.as_ref().map(WindowDto::from);

    serde_json::to_string(&dto)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Find every event that blocks a required attendee during a proposed window.
///
/// The proposed window is `[start, end)` in day-clock minutes. Returns a JSON
/// string containing an array of `{start, end, attendees, overlap_minutes}`
/// objects.
#[wasm_bindgen(js_name = "findConflicts")]
pub fn find_conflicts_js(
    events_json: &str,
    request_json: &str,
    start: i64,
    end: i64,
) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    let request = parse_request_json(request_json)?;
    let proposed = TimeRange::new(start, end).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let conflicts = find_conflicts(&events, &request, proposed);
    let dtos: Vec<ConflictDto> = conflicts
        .iter()
        .map(|c| {
            let mut attendees: Vec<String> =
                c.event.attendees.iter().map(|a| a.to_string()).collect();
            attendees.sort();
            ConflictDto {
                start: c.event.when.start(),
                end: c.event.when.end(),
                attendees,
                overlap_minutes: c.overlap_minutes,
            }
        })
        .collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
