//! Tests for app/app_events

use super::*;
use crate::clock::ManualClock;
use crate::manager::ToastManager;
use crate::toast::{ToastMessage, ToastVariant};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn test_app() -> (App<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    (App::new(ToastManager::with_clock(clock.clone())), clock)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

fn draw(app: &mut App<ManualClock>) {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
}

#[test]
fn test_quit_keys() {
    for code in [KeyCode::Esc, KeyCode::Char('q')] {
        let (mut app, _clock) = test_app();
        app.handle_key(key(code));
        assert!(app.should_quit());
    }

    let (mut app, _clock) = test_app();
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn test_variant_keys_show_toasts() {
    let (mut app, _clock) = test_app();

    for c in ['s', 'e', 'w', 'i', 'n'] {
        app.handle_key(key(KeyCode::Char(c)));
    }

    let variants: Vec<ToastVariant> = app.toasts.toasts().iter().map(|t| t.variant()).collect();
    assert_eq!(
        variants,
        vec![
            ToastVariant::Success,
            ToastVariant::Error,
            ToastVariant::Warning,
            ToastVariant::Info,
            ToastVariant::Default,
        ]
    );
    assert_eq!(app.shown, 5);
}

#[test]
fn test_save_then_update_keeps_one_toast() {
    let (mut app, clock) = test_app();

    app.handle_key(key(KeyCode::Char('p')));
    clock.advance_ms(500);
    app.tick();
    app.handle_key(key(KeyCode::Char('u')));

    assert_eq!(app.toasts.len(), 1);
    let toast = app.toasts.get(SAVE_TOAST_ID).unwrap();
    assert_eq!(toast.message(), &ToastMessage::from("Saved!"));
    assert_eq!(toast.variant(), ToastVariant::Success);

    clock.advance_ms(2300);
    app.tick();
    assert!(app.toasts.is_empty());
}

#[test]
fn test_dismiss_and_clear_keys() {
    let (mut app, _clock) = test_app();
    app.handle_key(key(KeyCode::Char('s')));
    app.handle_key(key(KeyCode::Char('i')));

    app.handle_key(key(KeyCode::Char('d')));
    let open: Vec<bool> = app.toasts.toasts().iter().map(|t| t.is_open()).collect();
    assert_eq!(open, vec![true, false]);

    app.handle_key(key(KeyCode::Char('c')));
    assert!(app.toasts.is_empty());
}

#[test]
fn test_mouse_move_over_toast_pauses_it() {
    let (mut app, _clock) = test_app();
    app.handle_key(key(KeyCode::Char('s')));
    draw(&mut app);

    let area = app.toast_layout[0].area;
    app.handle_mouse(mouse(MouseEventKind::Moved, area.x + 1, area.y + 1));
    assert!(app.toasts.toasts()[0].is_paused());

    app.handle_mouse(mouse(MouseEventKind::Moved, 0, 0));
    assert!(!app.toasts.toasts()[0].is_paused());
}

#[test]
fn test_click_close_marker_dismisses() {
    let (mut app, _clock) = test_app();
    app.handle_key(key(KeyCode::Char('s')));
    draw(&mut app);

    let close = app.toast_layout[0].close_button.unwrap();
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), close.x + 1, close.y));

    assert!(!app.toasts.toasts()[0].is_open());
}

#[test]
fn test_click_elsewhere_does_nothing() {
    let (mut app, _clock) = test_app();
    app.handle_key(key(KeyCode::Char('s')));
    draw(&mut app);

    let area = app.toast_layout[0].area;
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), area.x + 1, area.y + 1));

    assert!(app.toasts.toasts()[0].is_open());
}

#[test]
fn test_handle_event_ignores_key_release() {
    let (mut app, _clock) = test_app();
    let mut release = key(KeyCode::Char('q'));
    release.kind = KeyEventKind::Release;

    app.handle_event(Event::Key(release));
    assert!(!app.should_quit());

    app.handle_event(Event::Key(key(KeyCode::Char('q'))));
    assert!(app.should_quit());
}
