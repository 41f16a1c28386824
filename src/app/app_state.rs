use std::time::{Duration, Instant};

use crate::clock::{Clock, SystemClock};
use crate::manager::ToastManager;
use crate::toast::{ToastArea, ToastEvent};

/// Longest the event loop waits between redraws while a countdown runs,
/// so progress bars keep moving
pub const MAX_FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Idle wait when nothing is scheduled
pub const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Demo application state
pub struct App<C: Clock = SystemClock> {
    pub toasts: ToastManager<C>,
    /// Where toasts were drawn in the last frame, for mouse hit testing
    pub toast_layout: Vec<ToastArea>,
    pub should_quit: bool,
    /// Running number used to label demo messages
    pub shown: usize,
}

impl<C: Clock> App<C> {
    pub fn new(toasts: ToastManager<C>) -> Self {
        Self {
            toasts,
            toast_layout: Vec::new(),
            should_quit: false,
            shown: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Advance all toasts; returns what changed
    pub fn tick(&mut self) -> Vec<ToastEvent> {
        let events = self.toasts.tick();
        for event in &events {
            if let ToastEvent::Completed(id) = event {
                // Layout is stale until the next frame; drop the purged toast now
                self.toast_layout.retain(|t| &t.id != id);
            }
        }
        events
    }

    /// How long the event loop may block waiting for input
    pub fn poll_timeout(&self) -> Duration {
        let now = self.toasts.now();
        let has_countdown = self
            .toasts
            .toasts()
            .iter()
            .any(|t| t.is_open() && !t.duration().is_zero() && !t.is_paused());

        let cap = if has_countdown {
            MAX_FRAME_INTERVAL
        } else {
            IDLE_POLL_INTERVAL
        };

        match self.toasts.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(cap),
            None => cap,
        }
    }

    pub fn now(&self) -> Instant {
        self.toasts.now()
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
