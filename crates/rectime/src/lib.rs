//! Rectime: recording-session timing and file-name timestamps.
//!
//! Measures elapsed *active* recording time across start/pause/resume/stop
//! transitions and renders calendar instants as the fixed-width
//! `YYYYMMDDhhmmss` stamps used to name recording output files.
//!
//! # Example
//!
//! ```
//! use rectime::{SessionTimer, TimerResult, TimerState};
//!
//! fn main() -> TimerResult<()> {
//!     let mut timer = SessionTimer::new();
//!
//!     timer.start()?;
//!     timer.pause()?;
//!     timer.resume()?;
//!     timer.stop()?;
//!
//!     assert_eq!(timer.state(), TimerState::Stopped);
//!     println!("Recorded for {:?}", timer.elapsed());
//!     Ok(())
//! }
//! ```

mod error;
mod timer;
pub mod timestamp;

pub use {
    error::Result as TimerResult,
    error::TimerError,
    timer::{Clock, MonotonicClock, SessionTimer, TimerState},
};

#[cfg(test)]
mod tests;
