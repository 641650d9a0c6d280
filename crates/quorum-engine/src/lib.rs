//! # quorum-engine
//!
//! Deterministic meeting-window resolution for calendar scheduling agents.
//!
//! Given a day's worth of busy events (each a time range plus the attendees
//! it blocks) and a meeting request (required attendees plus a duration),
//! computes every maximal window in which all required attendees are
//! simultaneously free. Pure computation over immutable inputs: no I/O, no
//! shared state, safe to call concurrently.
//!
//! ## Modules
//!
//! - [`timerange`] — minute-granularity ranges on the single-day clock
//! - [`event`] — busy events, attendee identifiers, meeting requests
//! - [`resolver`] — the free-window sweep
//! - [`conflict`] — clash detection for a proposed window
//! - [`error`] — error types

pub mod conflict;
pub mod error;
pub mod event;
pub mod resolver;
pub mod timerange;

pub use conflict::{find_conflicts, Conflict};
pub use error::QuorumError;
pub use event::{AttendeeId, Event, MeetingRequest};
pub use resolver::{find_first_window, find_meeting_windows};
pub use timerange::TimeRange;
