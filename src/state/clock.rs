use std::time::{Duration, Instant};

use crate::config::CLOCK_STEP;

/// Free-running minute counter. Not synced to any time source.
///
/// At most one minute is added per [`ClockState::advance`] call, so a stall
/// longer than a minute loses the extra minutes.
#[derive(Debug, Clone)]
pub struct ClockState {
    hour: u8,
    minute: u8,
    last_advance: Instant,
    step: Duration,
}

impl ClockState {
    pub fn new(hour: u8, minute: u8, now: Instant) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
            last_advance: now,
            step: CLOCK_STEP,
        }
    }

    #[cfg(test)]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    #[cfg(test)]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns true when the displayed time changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_advance) < self.step {
            return false;
        }
        self.minute += 1;
        if self.minute > 59 {
            self.minute = 0;
            self.hour += 1;
        }
        if self.hour > 23 {
            self.hour = 0;
        }
        self.last_advance = now;
        true
    }
}

impl std::fmt::Display for ClockState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
