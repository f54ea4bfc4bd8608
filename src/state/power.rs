use std::time::{Duration, Instant};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PowerState {
    Active,
    Blanked,
}

impl std::fmt::Display for PowerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PowerState::Active => write!(f, "Active"),
            PowerState::Blanked => write!(f, "Blanked"),
        }
    }
}

/// Tracks input recency and decides when the display blanks.
///
/// Only the absence of input for `timeout` blanks the display, only
/// [`InactivityMonitor::wake`] brings it back.
#[derive(Debug)]
pub struct InactivityMonitor {
    state: PowerState,
    last_input: Instant,
    timeout: Duration,
}

impl InactivityMonitor {
    pub fn new(timeout: Duration, now: Instant) -> Self {
        Self {
            state: PowerState::Active,
            last_input: now,
            timeout,
        }
    }

    pub fn state(&self) -> PowerState {
        self.state
    }

    pub fn note_input(&mut self, now: Instant) {
        self.last_input = now;
    }

    pub fn inactive_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_input)
    }

    /// Returns the new state when this check blanked the display.
    pub fn check(&mut self, now: Instant) -> Option<PowerState> {
        if self.state == PowerState::Blanked {
            return None;
        }
        if self.inactive_for(now) >= self.timeout {
            self.state = PowerState::Blanked;
            return Some(self.state);
        }
        None
    }

    /// The waking tap counts as input. Returns the new state when the display was blanked.
    pub fn wake(&mut self, now: Instant) -> Option<PowerState> {
        self.note_input(now);
        if self.state == PowerState::Active {
            return None;
        }
        self.state = PowerState::Active;
        Some(self.state)
    }
}
