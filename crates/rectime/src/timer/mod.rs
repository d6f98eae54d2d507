mod clock;
mod session;
mod state;

pub use {
    clock::{Clock, MonotonicClock},
    session::SessionTimer,
    state::TimerState,
};
