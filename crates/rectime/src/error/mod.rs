use crate::timer::TimerState;

use error_location::ErrorLocation;
use thiserror::Error;

/// Timer lifecycle errors with source location tracking.
#[derive(Error, Debug)]
pub enum TimerError {
    /// An operation was invoked from a state that does not permit it.
    ///
    /// Surfaced synchronously and never retried: silently ignoring an
    /// illegal transition would corrupt the elapsed-time accounting the
    /// recording session relies on.
    #[error("Cannot {operation} from {state:?} state {location}")]
    InvalidTransition {
        /// The operation that was attempted.
        operation: &'static str,
        /// The state the timer was in at the time of the call.
        state: TimerState,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`TimerError`].
pub type Result<T> = std::result::Result<T, TimerError>;
