//! Terminal demo application hosting a [`ToastManager`](crate::ToastManager)

mod app_events;
mod app_render;
mod app_state;

pub use app_events::SAVE_TOAST_ID;
pub use app_state::{App, IDLE_POLL_INTERVAL, MAX_FRAME_INTERVAL};
