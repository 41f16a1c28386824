use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::time::Instant;

use super::sender::{ToastRequest, ToastSender};
use crate::clock::{Clock, SystemClock};
use crate::config::ToastConfig;
use crate::toast::{
    Toast, ToastDefaults, ToastEvent, ToastId, ToastMessage, ToastOptions, ToastVariant,
};

/// Owner of the active toast collection
///
/// Display order is the order in which ids were first shown. Records are
/// purged once their completion event fires, or right away on [`remove`].
///
/// [`remove`]: ToastManager::remove
pub struct ToastManager<C: Clock = SystemClock> {
    toasts: Vec<Toast>,
    defaults: ToastDefaults,
    clock: C,
    request_tx: Sender<ToastRequest>,
    request_rx: Receiver<ToastRequest>,
}

impl ToastManager<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn from_config(config: &ToastConfig) -> Self {
        Self::new().with_defaults(config.into())
    }
}

impl Default for ToastManager<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ToastManager<C> {
    pub fn with_clock(clock: C) -> Self {
        let (request_tx, request_rx) = mpsc::channel();
        Self {
            toasts: Vec::new(),
            defaults: ToastDefaults::default(),
            clock,
            request_tx,
            request_rx,
        }
    }

    pub fn with_defaults(mut self, defaults: ToastDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn defaults(&self) -> &ToastDefaults {
        &self.defaults
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Show a message, or update the one already using `options.id`
    ///
    /// Returns the id of the affected toast. An existing toast keeps its
    /// place in display order and is re-opened even if it was closing.
    pub fn show(&mut self, message: impl Into<ToastMessage>, options: ToastOptions) -> ToastId {
        let id = options.id.clone().unwrap_or_else(ToastId::generate);
        self.upsert(id.clone(), message.into(), options);
        id
    }

    pub fn success(&mut self, message: impl Into<ToastMessage>, options: ToastOptions) -> ToastId {
        self.show_variant(ToastVariant::Success, message.into(), options)
    }

    pub fn error(&mut self, message: impl Into<ToastMessage>, options: ToastOptions) -> ToastId {
        self.show_variant(ToastVariant::Error, message.into(), options)
    }

    pub fn warning(&mut self, message: impl Into<ToastMessage>, options: ToastOptions) -> ToastId {
        self.show_variant(ToastVariant::Warning, message.into(), options)
    }

    pub fn info(&mut self, message: impl Into<ToastMessage>, options: ToastOptions) -> ToastId {
        self.show_variant(ToastVariant::Info, message.into(), options)
    }

    /// The helper's variant always wins over `options.variant`
    fn show_variant(
        &mut self,
        variant: ToastVariant,
        message: ToastMessage,
        options: ToastOptions,
    ) -> ToastId {
        if options.variant.is_some_and(|v| v != variant) {
            log::warn!(
                "ignoring variant {:?} passed to the {:?} helper",
                options.variant,
                variant
            );
        }
        self.show(message, options.variant(variant))
    }

    fn upsert(&mut self, id: ToastId, message: ToastMessage, options: ToastOptions) {
        let now = self.clock.now();

        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id() == &id) {
            log::debug!("updating toast {}", id);
            toast.merge(message, options, &self.defaults, now);
            return;
        }

        log::debug!("showing toast {}", id);
        self.toasts
            .push(Toast::with_defaults(id, message, options, &self.defaults, now));
    }

    /// Drop a toast immediately, whatever state it is in
    ///
    /// Unknown ids are ignored.
    pub fn remove(&mut self, id: impl AsRef<str>) {
        let id = id.as_ref();
        if let Some(index) = self.position_of(id) {
            let mut toast = self.toasts.remove(index);
            toast.cancel();
            log::debug!("removed toast {}", id);
        }
    }

    /// User-initiated close of one toast
    pub fn dismiss(&mut self, id: impl AsRef<str>) {
        let now = self.clock.now();
        if let Some(toast) = self.find_mut(id.as_ref()) {
            toast.dismiss(now);
        }
    }

    /// Close a toast on behalf of a controlling party
    pub fn hide(&mut self, id: impl AsRef<str>) {
        let now = self.clock.now();
        if let Some(toast) = self.find_mut(id.as_ref()) {
            toast.set_open(false, now);
        }
    }

    /// Close the most recently shown toast that is still open
    pub fn dismiss_latest(&mut self) -> Option<ToastId> {
        let now = self.clock.now();
        let toast = self.toasts.iter_mut().rev().find(|t| t.is_open())?;
        toast.dismiss(now);
        Some(toast.id().clone())
    }

    pub fn set_hovered(&mut self, id: impl AsRef<str>, hovered: bool) {
        let now = self.clock.now();
        if let Some(toast) = self.find_mut(id.as_ref()) {
            toast.set_hovered(hovered, now);
        }
    }

    /// Mark `target` as the only hovered toast; `None` clears all hover
    pub fn set_hover_target(&mut self, target: Option<&ToastId>) {
        let now = self.clock.now();
        for toast in &mut self.toasts {
            let hovered = target.is_some_and(|id| toast.id() == id);
            toast.set_hovered(hovered, now);
        }
    }

    /// Apply queued requests and advance every toast to the current time
    ///
    /// Completed toasts are purged after all toasts were advanced, so one
    /// toast finishing never disturbs another. Returns the transitions that
    /// happened, in display order.
    pub fn tick(&mut self) -> Vec<ToastEvent> {
        self.drain_requests();

        let now = self.clock.now();
        let mut events = Vec::new();
        for toast in &mut self.toasts {
            while let Some(event) = toast.tick(now) {
                events.push(event);
            }
        }

        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_completed());
        if self.toasts.len() != before {
            log::debug!("purged {} toast(s)", before - self.toasts.len());
        }

        events
    }

    fn drain_requests(&mut self) {
        loop {
            match self.request_rx.try_recv() {
                Ok(ToastRequest::Show {
                    id,
                    message,
                    options,
                }) => self.upsert(id, message, options),
                Ok(ToastRequest::Remove(id)) => self.remove(&id),
                Ok(ToastRequest::Dismiss(id)) => self.dismiss(&id),
                // The manager holds a sender itself, so the channel never disconnects
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return,
            }
        }
    }

    /// Handle for queuing requests from outside the manager's owner
    pub fn sender(&self) -> ToastSender {
        ToastSender::new(self.request_tx.clone())
    }

    /// Force-remove every toast, cancelling all pending timers
    pub fn clear(&mut self) {
        for toast in &mut self.toasts {
            toast.cancel();
        }
        if !self.toasts.is_empty() {
            log::debug!("cleared {} toast(s)", self.toasts.len());
        }
        self.toasts.clear();
    }

    /// Active toasts in display order
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn get(&self, id: impl AsRef<str>) -> Option<&Toast> {
        let id = id.as_ref();
        self.toasts.iter().find(|t| t.id().as_str() == id)
    }

    pub fn contains(&self, id: impl AsRef<str>) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Earliest instant at which [`ToastManager::tick`] has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        self.toasts.iter().filter_map(Toast::next_deadline).min()
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.toasts.iter().position(|t| t.id().as_str() == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|t| t.id().as_str() == id)
    }
}

impl<C: Clock> Drop for ToastManager<C> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
#[path = "manager_state_tests.rs"]
mod manager_state_tests;
