//! Cross-context handle to a [`ToastManager`](super::ToastManager)
//!
//! Code that does not own the manager (worker threads, background tasks)
//! queues requests through a `ToastSender`. The manager applies them at the
//! start of its next `tick`. Ids are resolved on the caller's side so `show`
//! can return one right away.

use std::sync::mpsc::Sender;

use crate::error::ToastError;
use crate::toast::{ToastId, ToastMessage, ToastOptions, ToastVariant};

#[derive(Debug)]
pub(crate) enum ToastRequest {
    Show {
        id: ToastId,
        message: ToastMessage,
        options: ToastOptions,
    },
    Remove(ToastId),
    Dismiss(ToastId),
}

#[derive(Debug, Clone)]
pub struct ToastSender {
    tx: Sender<ToastRequest>,
}

impl ToastSender {
    pub(crate) fn new(tx: Sender<ToastRequest>) -> Self {
        Self { tx }
    }

    pub fn show(
        &self,
        message: impl Into<ToastMessage>,
        options: ToastOptions,
    ) -> Result<ToastId, ToastError> {
        let id = options.id.clone().unwrap_or_else(ToastId::generate);
        self.send(ToastRequest::Show {
            id: id.clone(),
            message: message.into(),
            options,
        })?;
        Ok(id)
    }

    pub fn success(
        &self,
        message: impl Into<ToastMessage>,
        options: ToastOptions,
    ) -> Result<ToastId, ToastError> {
        self.show(message, options.variant(ToastVariant::Success))
    }

    pub fn error(
        &self,
        message: impl Into<ToastMessage>,
        options: ToastOptions,
    ) -> Result<ToastId, ToastError> {
        self.show(message, options.variant(ToastVariant::Error))
    }

    pub fn warning(
        &self,
        message: impl Into<ToastMessage>,
        options: ToastOptions,
    ) -> Result<ToastId, ToastError> {
        self.show(message, options.variant(ToastVariant::Warning))
    }

    pub fn info(
        &self,
        message: impl Into<ToastMessage>,
        options: ToastOptions,
    ) -> Result<ToastId, ToastError> {
        self.show(message, options.variant(ToastVariant::Info))
    }

    pub fn remove(&self, id: impl Into<ToastId>) -> Result<(), ToastError> {
        self.send(ToastRequest::Remove(id.into()))
    }

    pub fn dismiss(&self, id: impl Into<ToastId>) -> Result<(), ToastError> {
        self.send(ToastRequest::Dismiss(id.into()))
    }

    fn send(&self, request: ToastRequest) -> Result<(), ToastError> {
        self.tx.send(request).map_err(|err| {
            log::error!("toast request dropped, manager is gone: {:?}", err.0);
            ToastError::ManagerClosed
        })
    }
}

#[cfg(test)]
#[path = "sender_tests.rs"]
mod sender_tests;
