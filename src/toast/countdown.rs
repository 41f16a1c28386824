//! Cancellable, pausable countdown owned by a single toast

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Countdown {
    /// No timer pending
    #[default]
    Idle,
    Running {
        deadline: Instant,
    },
    Paused {
        remaining: Duration,
    },
}

impl Countdown {
    /// Arm a fresh countdown, replacing any pending one
    ///
    /// A zero duration leaves the countdown idle, and so does one too long
    /// for `Instant` to represent: such a toast never expires.
    pub fn start(now: Instant, duration: Duration) -> Self {
        if duration.is_zero() {
            return Countdown::Idle;
        }
        match now.checked_add(duration) {
            Some(deadline) => Countdown::Running { deadline },
            None => Countdown::Idle,
        }
    }

    /// Like [`Countdown::start`] but begins suspended
    pub fn start_paused(duration: Duration) -> Self {
        if duration.is_zero() {
            Countdown::Idle
        } else {
            Countdown::Paused {
                remaining: duration,
            }
        }
    }

    /// Stop the clock, keeping the exact time left
    pub fn pause(&mut self, now: Instant) {
        if let Countdown::Running { deadline } = *self {
            *self = Countdown::Paused {
                remaining: deadline.saturating_duration_since(now),
            };
        }
    }

    pub fn resume(&mut self, now: Instant) {
        if let Countdown::Paused { remaining } = *self {
            *self = match now.checked_add(remaining) {
                Some(deadline) => Countdown::Running { deadline },
                None => Countdown::Idle,
            };
        }
    }

    pub fn cancel(&mut self) {
        *self = Countdown::Idle;
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Countdown::Paused { .. })
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Countdown::Idle)
    }

    pub fn deadline(&self) -> Option<Instant> {
        match self {
            Countdown::Running { deadline } => Some(*deadline),
            _ => None,
        }
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self {
            Countdown::Idle => None,
            Countdown::Running { deadline } => Some(deadline.saturating_duration_since(now)),
            Countdown::Paused { remaining } => Some(*remaining),
        }
    }

    /// True once a running countdown reached its deadline
    ///
    /// Paused and idle countdowns never expire.
    pub fn is_expired(&self, now: Instant) -> bool {
        matches!(self, Countdown::Running { deadline } if now >= *deadline)
    }
}

#[cfg(test)]
#[path = "countdown_tests.rs"]
mod countdown_tests;
