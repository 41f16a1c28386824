//! Toast module
//!
//! A toast is one short-lived message with its own countdown. It closes
//! itself when the countdown runs out (or when dismissed), waits out an exit
//! grace period, and then reports completion exactly once so its owner can
//! purge it.

mod countdown;
mod toast_render;
mod toast_state;
mod types;

pub use countdown::Countdown;
pub use toast_render::{
    TOAST_MAX_WIDTH, TOAST_MIN_WIDTH, ToastArea, close_button_at, render_toasts, toast_at,
    toast_layout, toast_size,
};
pub use toast_state::Toast;
pub use types::{
    DEFAULT_DURATION, EXIT_GRACE, ToastDefaults, ToastEvent, ToastId, ToastMessage, ToastOptions,
    ToastPosition, ToastVariant, Urgency,
};
