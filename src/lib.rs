//! Ephemeral toast notifications
//!
//! [`ToastManager`] keeps the ordered set of active toasts. Each [`Toast`]
//! runs its own countdown, can be paused while hovered, and waits out a short
//! exit grace period before it is purged. Rendering targets ratatui.
//!
//! ```no_run
//! use toastr::{ToastManager, ToastOptions};
//!
//! let mut toasts = ToastManager::new();
//! toasts.show("Saving...", ToastOptions::new().id("save-1").persistent());
//! toasts.success("Saved!", ToastOptions::new().id("save-1").duration_ms(2000));
//!
//! // Call once per frame
//! for event in toasts.tick() {
//!     println!("{:?}", event);
//! }
//! ```

pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod manager;
pub mod toast;
pub mod widgets;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::ToastError;
pub use manager::{ToastManager, ToastSender};
pub use toast::{
    Toast, ToastEvent, ToastId, ToastMessage, ToastOptions, ToastPosition, ToastVariant, Urgency,
};
