use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::App;
use crate::clock::Clock;
use crate::toast::{ToastOptions, close_button_at, toast_at};

/// Id of the demo's long-running "saving" toast
pub const SAVE_TOAST_ID: &str = "save-1";

impl<C: Clock> App<C> {
    /// Dispatch one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Only process key press events (avoid duplicates)
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('s') => {
                let message = self.next_message("Changes saved");
                self.toasts.success(message, ToastOptions::new());
            }
            KeyCode::Char('e') => {
                let message = self.next_message("Could not reach the server");
                self.toasts
                    .error(message, ToastOptions::new().title("Request failed"));
            }
            KeyCode::Char('w') => {
                let message = self.next_message("Session expires soon");
                self.toasts.warning(message, ToastOptions::new());
            }
            KeyCode::Char('i') => {
                let message = self.next_message("New appointment slots available");
                self.toasts.info(message, ToastOptions::new());
            }
            KeyCode::Char('n') => {
                let message = self.next_message("Hello");
                self.toasts.show(message, ToastOptions::new());
            }
            KeyCode::Char('p') => {
                self.toasts.show(
                    "Saving...",
                    ToastOptions::new().id(SAVE_TOAST_ID).persistent(),
                );
            }
            KeyCode::Char('u') => {
                self.toasts.success(
                    "Saved!",
                    ToastOptions::new().id(SAVE_TOAST_ID).duration_ms(2000),
                );
            }
            KeyCode::Char('d') => {
                self.toasts.dismiss_latest();
            }
            KeyCode::Char('c') => self.toasts.clear(),
            _ => {}
        }
    }

    /// Hover pauses the toast under the pointer; clicking its close marker
    /// dismisses it
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let target = toast_at(&self.toast_layout, mouse.column, mouse.row)
                    .map(|t| t.id.clone());
                self.toasts.set_hover_target(target.as_ref());
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(id) = close_button_at(&self.toast_layout, mouse.column, mouse.row) {
                    let id = id.clone();
                    self.toasts.dismiss(&id);
                }
            }
            _ => {}
        }
    }

    fn next_message(&mut self, text: &str) -> String {
        self.shown += 1;
        format!("{} (#{})", text, self.shown)
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
