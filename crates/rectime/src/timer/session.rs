use crate::{
    TimerError, TimerResult,
    timer::{Clock, MonotonicClock, TimerState},
};

use std::{
    panic::Location,
    time::{Duration, Instant},
};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Tracks elapsed active recording time for one recording session.
///
/// Owns the four-state lifecycle (see [`TimerState`]) and the duration
/// accounting behind it: time accumulates only while `Running`, survives
/// any number of pause/resume cycles, and freezes at [`stop`](Self::stop).
/// The timer is deliberately decoupled from audio capture itself -- it
/// measures how long the session was actively recording, nothing more.
///
/// # Thread Safety
///
/// SessionTimer is NOT thread-safe. It is meant to be driven by
/// UI-triggered calls on a single controlling thread; callers that share
/// it across threads must serialize access with their own mutex.
pub struct SessionTimer<C: Clock = MonotonicClock> {
    clock: C,
    session_id: Uuid,
    state: TimerState,
    accumulated: Duration,
    interval_started: Option<Instant>,
}

impl SessionTimer<MonotonicClock> {
    /// Creates a timer backed by the host's monotonic clock.
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock)
    }
}

impl Default for SessionTimer<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SessionTimer<C> {
    /// Creates a timer driven by the supplied clock.
    pub fn with_clock(clock: C) -> Self {
        let session_id = Uuid::new_v4();

        debug!(session_id = %session_id, "SessionTimer created");

        Self {
            clock,
            session_id,
            state: TimerState::Idle,
            accumulated: Duration::ZERO,
            interval_started: None,
        }
    }

    /// Starts the recording session.
    ///
    /// Resets the accumulated total and opens the first running interval.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::InvalidTransition`] unless the timer is
    /// `Idle`. The timer is left untouched on error.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn start(&mut self) -> TimerResult<()> {
        if self.state != TimerState::Idle {
            return Err(TimerError::InvalidTransition {
                operation: "start",
                state: self.state,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.accumulated = Duration::ZERO;
        self.interval_started = Some(self.clock.now());
        self.state = TimerState::Running;

        info!(session_id = %self.session_id, "Recording timer started");

        Ok(())
    }

    /// Pauses the session, folding the open interval into the total.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::InvalidTransition`] unless the timer is
    /// `Running`. The timer is left untouched on error.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn pause(&mut self) -> TimerResult<()> {
        if self.state != TimerState::Running {
            return Err(TimerError::InvalidTransition {
                operation: "pause",
                state: self.state,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.close_open_interval();
        self.state = TimerState::Paused;

        debug!(
            session_id = %self.session_id,
            accumulated_ms = self.accumulated.as_millis(),
            "Recording timer paused"
        );

        Ok(())
    }

    /// Resumes a paused session by opening a new running interval.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::InvalidTransition`] unless the timer is
    /// `Paused`. The timer is left untouched on error.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn resume(&mut self) -> TimerResult<()> {
        if self.state != TimerState::Paused {
            return Err(TimerError::InvalidTransition {
                operation: "resume",
                state: self.state,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.interval_started = Some(self.clock.now());
        self.state = TimerState::Running;

        debug!(session_id = %self.session_id, "Recording timer resumed");

        Ok(())
    }

    /// Stops the session, freezing the accumulated total.
    ///
    /// A still-open running interval is finalized first; stopping while
    /// paused keeps the total as-is. `Stopped` is terminal -- construct a
    /// fresh timer for the next session.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::InvalidTransition`] unless the timer is
    /// `Running` or `Paused`. The timer is left untouched on error.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn stop(&mut self) -> TimerResult<()> {
        if !matches!(self.state, TimerState::Running | TimerState::Paused) {
            return Err(TimerError::InvalidTransition {
                operation: "stop",
                state: self.state,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.close_open_interval();
        self.state = TimerState::Stopped;

        info!(
            session_id = %self.session_id,
            total_ms = self.accumulated.as_millis(),
            "Recording timer stopped"
        );

        Ok(())
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Elapsed active recording time.
    ///
    /// While `Running` this includes the open interval, so it can be
    /// polled for a live readout; once `Stopped` it is the frozen session
    /// total.
    pub fn elapsed(&self) -> Duration {
        match self.interval_started {
            Some(started) => self.accumulated + self.clock.now().saturating_duration_since(started),
            None => self.accumulated,
        }
    }

    /// Session id for log correlation.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    // Saturating arithmetic keeps the total monotone even for zero-length
    // or sub-resolution intervals.
    fn close_open_interval(&mut self) {
        if let Some(started) = self.interval_started.take() {
            self.accumulated += self.clock.now().saturating_duration_since(started);
        }
    }
}
