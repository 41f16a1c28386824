use std::time::{Duration, Instant};

use super::countdown::Countdown;
use super::types::{
    ResolvedOptions, ToastDefaults, ToastEvent, ToastId, ToastMessage, ToastOptions,
    ToastPosition, ToastVariant, Urgency,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Open,
    /// Close requested; purged once `purge_at` passes
    Closing { purge_at: Instant },
}

/// One notification and its countdown-to-close lifecycle
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    message: ToastMessage,
    options: ResolvedOptions,
    exit_grace: Duration,
    created_at: Instant,
    phase: Phase,
    countdown: Countdown,
    hovered: bool,
    /// Completion already handed out (or cancelled); never fires again
    completed: bool,
}

impl Toast {
    pub fn new(
        id: impl Into<ToastId>,
        message: impl Into<ToastMessage>,
        options: ToastOptions,
        now: Instant,
    ) -> Self {
        Self::with_defaults(id, message, options, &ToastDefaults::default(), now)
    }

    pub fn with_defaults(
        id: impl Into<ToastId>,
        message: impl Into<ToastMessage>,
        options: ToastOptions,
        defaults: &ToastDefaults,
        now: Instant,
    ) -> Self {
        let options = defaults.resolve(options);
        let countdown = Countdown::start(now, options.duration);

        Self {
            id: id.into(),
            message: message.into(),
            options,
            exit_grace: defaults.exit_grace,
            created_at: now,
            phase: Phase::Open,
            countdown,
            hovered: false,
            completed: false,
        }
    }

    /// Advance the lifecycle to `now`
    ///
    /// Returns at most one transition per call. A countdown that expired
    /// while nobody was ticking starts its grace period at the original
    /// deadline, so calling again right away may yield the completion too.
    pub fn tick(&mut self, now: Instant) -> Option<ToastEvent> {
        if self.completed {
            return None;
        }

        match self.phase {
            Phase::Open => {
                let deadline = self.countdown.deadline()?;
                if now < deadline {
                    return None;
                }
                self.begin_close(deadline);
                Some(ToastEvent::Closing(self.id.clone()))
            }
            Phase::Closing { purge_at } => {
                if now < purge_at {
                    return None;
                }
                self.completed = true;
                log::debug!("toast {} completed", self.id);
                Some(ToastEvent::Completed(self.id.clone()))
            }
        }
    }

    /// User-initiated close; skips whatever is left of the countdown
    pub fn dismiss(&mut self, now: Instant) {
        if self.phase == Phase::Open && !self.completed {
            self.begin_close(now);
        }
    }

    /// Follow an externally controlled open flag
    ///
    /// A toast that started closing stays closed; only a manager merge can
    /// bring it back.
    pub fn set_open(&mut self, open: bool, now: Instant) {
        if open {
            if !self.is_open() {
                log::debug!("ignoring re-open of closing toast {}", self.id);
            }
            return;
        }
        self.dismiss(now);
    }

    /// Pointer entered (`true`) or left (`false`) the toast
    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if self.hovered == hovered {
            return;
        }
        self.hovered = hovered;

        if !self.options.pause_on_hover || !self.is_open() {
            return;
        }
        if hovered {
            self.countdown.pause(now);
        } else {
            self.countdown.resume(now);
        }
    }

    /// Replace content and options in place and start over as open
    pub(crate) fn merge(
        &mut self,
        message: ToastMessage,
        options: ToastOptions,
        defaults: &ToastDefaults,
        now: Instant,
    ) {
        if !self.is_open() {
            log::debug!("reviving closing toast {}", self.id);
        }

        self.message = message;
        self.options.merge(options, defaults);
        self.phase = Phase::Open;
        self.completed = false;
        self.countdown = if self.hovered && self.options.pause_on_hover {
            Countdown::start_paused(self.options.duration)
        } else {
            Countdown::start(now, self.options.duration)
        };
    }

    /// Drop pending timers; no completion is produced after this
    pub fn cancel(&mut self) {
        self.countdown.cancel();
        self.completed = true;
    }

    fn begin_close(&mut self, at: Instant) {
        self.countdown.cancel();
        // A grace period past what `Instant` can hold completes right away
        let purge_at = at.checked_add(self.exit_grace).unwrap_or_else(|| {
            log::warn!("exit grace {:?} out of range for toast {}", self.exit_grace, self.id);
            at
        });
        self.phase = Phase::Closing { purge_at };
        log::debug!("toast {} closing", self.id);
    }

    pub fn id(&self) -> &ToastId {
        &self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.options.title.as_deref()
    }

    pub fn message(&self) -> &ToastMessage {
        &self.message
    }

    pub fn variant(&self) -> ToastVariant {
        self.options.variant
    }

    pub fn urgency(&self) -> Urgency {
        self.options.variant.urgency()
    }

    pub fn duration(&self) -> Duration {
        self.options.duration
    }

    pub fn position(&self) -> ToastPosition {
        self.options.position
    }

    pub fn pause_on_hover(&self) -> bool {
        self.options.pause_on_hover
    }

    pub fn show_icon(&self) -> bool {
        self.options.show_icon
    }

    pub fn show_close_button(&self) -> bool {
        self.options.show_close_button
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    pub fn is_paused(&self) -> bool {
        self.countdown.is_paused()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Open with no countdown running: a zero duration, or one too long to
    /// ever elapse
    pub fn is_persistent(&self) -> bool {
        self.is_open() && self.countdown.is_idle()
    }

    /// Countdown time left; `None` for persistent or closing toasts
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        if !self.is_open() {
            return None;
        }
        self.countdown.remaining(now)
    }

    /// Fraction of the countdown still left, in `0.0..=1.0`
    pub fn progress(&self, now: Instant) -> Option<f64> {
        let total = self.options.duration;
        if total.is_zero() || self.is_persistent() {
            return None;
        }
        let remaining = self.remaining(now).unwrap_or(Duration::ZERO);
        Some((remaining.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0))
    }

    /// Earliest instant at which [`Toast::tick`] will report something
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.completed {
            return None;
        }
        match self.phase {
            Phase::Open => self.countdown.deadline(),
            Phase::Closing { purge_at } => Some(purge_at),
        }
    }
}

#[cfg(test)]
#[path = "toast_state_tests.rs"]
mod toast_state_tests;
