//! Error types for quorum-engine operations.

use thiserror::Error;

/// Errors raised at the value-construction boundary.
///
/// The resolver itself is total over validated inputs and never fails;
/// anything that would make it misbehave is rejected here first.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuorumError {
    /// A time range with `start > end` or bounds outside the day clock.
    #[error("invalid time range [{start}, {end}): bounds must satisfy 0 <= start <= end <= 1440")]
    InvalidTimeRange { start: i64, end: i64 },

    /// A meeting request with a negative duration.
    #[error("invalid meeting request: duration must be non-negative, got {0}")]
    InvalidRequest(i64),
}

pub type Result<T> = std::result::Result<T, QuorumError>;
