//! Toast manager module
//!
//! Owns the active toast collection: assigns ids, merges repeated ids into
//! the existing toast, and purges toasts once they report completion.

mod manager_state;
mod sender;

pub use manager_state::ToastManager;
pub use sender::ToastSender;
