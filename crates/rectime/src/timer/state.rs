/// Lifecycle state of a [`SessionTimer`](crate::SessionTimer).
///
/// Mirrors record/pause/resume/stop media UX:
/// Idle -> Running -> {Paused <-> Running} -> Stopped. `Stopped` is
/// terminal; a fresh timer must be constructed for the next session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Created, not yet started.
    Idle,
    /// Actively accumulating recording time.
    Running,
    /// Accumulation suspended, can resume.
    Paused,
    /// Session finished. The accumulated total is frozen.
    Stopped,
}
