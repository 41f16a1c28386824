use super::*;
use crate::toast::ToastOptions;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use std::time::Duration;

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn screen() -> Rect {
    Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    }
}

fn toast(id: &str, message: &str, options: ToastOptions, now: Instant) -> Toast {
    Toast::new(id, message.to_string(), options, now)
}

fn render_to_string(toasts: &[Toast], now: Instant) -> String {
    let mut terminal = create_test_terminal(80, 24);
    terminal
        .draw(|f| {
            let area = f.area();
            render_toasts(f, area, toasts, now);
        })
        .unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_toast_size_default() {
    let now = Instant::now();
    let t = toast("a", "Saved", ToastOptions::new(), now);

    assert_eq!(toast_size(&t), (TOAST_MIN_WIDTH, 4));
}

#[test]
fn test_toast_size_persistent_with_title_has_no_progress_row() {
    let now = Instant::now();
    let t = toast("a", "Saving...", ToastOptions::new().title("Upload").persistent(), now);

    assert_eq!(toast_size(&t).1, 4);
}

#[test]
fn test_toast_size_caps_width() {
    let now = Instant::now();
    let t = toast("a", &"x".repeat(200), ToastOptions::new(), now);

    assert_eq!(toast_size(&t).0, TOAST_MAX_WIDTH);
}

#[test]
fn test_layout_stacks_top_right_downward() {
    let now = Instant::now();
    let toasts = vec![
        toast("a", "first", ToastOptions::new(), now),
        toast("b", "second", ToastOptions::new(), now),
    ];

    let layout = toast_layout(screen(), &toasts);

    assert_eq!(layout.len(), 2);
    assert_eq!(layout[0].id, ToastId::new("a"));
    assert_eq!(layout[0].area, Rect { x: 55, y: 1, width: 24, height: 4 });
    assert_eq!(layout[1].area, Rect { x: 55, y: 5, width: 24, height: 4 });
}

#[test]
fn test_layout_stacks_bottom_upward() {
    let now = Instant::now();
    let options = ToastOptions::new().position(ToastPosition::BottomLeft);
    let toasts = vec![
        toast("a", "first", options.clone(), now),
        toast("b", "second", options, now),
    ];

    let layout = toast_layout(screen(), &toasts);

    assert_eq!(layout[0].area, Rect { x: 1, y: 19, width: 24, height: 4 });
    assert_eq!(layout[1].area, Rect { x: 1, y: 15, width: 24, height: 4 });
}

#[test]
fn test_layout_skips_closing_toasts() {
    let now = Instant::now();
    let mut closing = toast("a", "bye", ToastOptions::new(), now);
    closing.dismiss(now);
    let toasts = vec![closing, toast("b", "hi", ToastOptions::new(), now)];

    let layout = toast_layout(screen(), &toasts);

    assert_eq!(layout.len(), 1);
    assert_eq!(layout[0].id, ToastId::new("b"));
    assert_eq!(layout[0].area.y, 1);
}

#[test]
fn test_layout_drops_toasts_that_overflow() {
    let now = Instant::now();
    let area = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 10,
    };
    let toasts: Vec<Toast> = (0..5)
        .map(|i| toast(&i.to_string(), "msg", ToastOptions::new(), now))
        .collect();

    let layout = toast_layout(area, &toasts);

    assert_eq!(layout.len(), 2);
}

#[test]
fn test_layout_narrow_area_shrinks_width() {
    let now = Instant::now();
    let area = Rect {
        x: 0,
        y: 0,
        width: 12,
        height: 10,
    };
    let toasts = vec![toast("a", "msg", ToastOptions::new(), now)];

    let layout = toast_layout(area, &toasts);

    assert_eq!(layout[0].area.width, 10);
}

#[test]
fn test_toast_at_and_close_button_at() {
    let now = Instant::now();
    let toasts = vec![
        toast("a", "first", ToastOptions::new(), now),
        toast("b", "second", ToastOptions::new().show_close_button(false), now),
    ];
    let layout = toast_layout(screen(), &toasts);

    assert_eq!(toast_at(&layout, 60, 2).map(|t| &t.id), Some(&ToastId::new("a")));
    assert_eq!(toast_at(&layout, 60, 6).map(|t| &t.id), Some(&ToastId::new("b")));
    assert_eq!(toast_at(&layout, 10, 2), None);

    assert_eq!(close_button_at(&layout, 76, 1), Some(&ToastId::new("a")));
    assert_eq!(close_button_at(&layout, 76, 5), None);
    assert_eq!(close_button_at(&layout, 60, 1), None);
}

#[test]
fn test_render_shows_icon_title_message_and_close_marker() {
    let now = Instant::now();
    let toasts = vec![toast(
        "a",
        "Profile updated",
        ToastOptions::new()
            .title("Saved")
            .variant(crate::toast::ToastVariant::Success),
        now,
    )];

    let output = render_to_string(&toasts, now);

    assert!(output.contains("✓ Saved"));
    assert!(output.contains("  Profile updated"));
    assert!(output.contains(" x "));
    assert!(output.contains("━━━━"));
}

#[test]
fn test_render_without_icon_or_close_button() {
    let now = Instant::now();
    let toasts = vec![toast(
        "a",
        "Plain",
        ToastOptions::new().show_icon(false).show_close_button(false).persistent(),
        now,
    )];

    let output = render_to_string(&toasts, now);

    assert!(output.contains("│Plain"));
    assert!(!output.contains(" x "));
    assert!(!output.contains("━"));
}

#[test]
fn test_render_progress_bar_shrinks_over_time() {
    let t0 = Instant::now();
    let toasts = vec![toast("a", "msg", ToastOptions::new().duration_ms(1000), t0)];

    let start = render_to_string(&toasts, t0);
    let halfway = render_to_string(&toasts, t0 + Duration::from_millis(500));

    let filled = |s: &str| s.matches('━').count();
    assert_eq!(filled(&start), 22);
    assert_eq!(filled(&halfway), 11);
}

#[test]
fn test_render_empty_collection_draws_nothing() {
    let now = Instant::now();
    let output = render_to_string(&[], now);

    assert!(output.chars().all(|c| c == ' ' || c == '"' || c == '\n'));
}

#[test]
fn test_long_message_wraps_instead_of_truncating() {
    let now = Instant::now();
    let message = "Could not reach the appointment server, please check your connection and retry END";
    let toasts = vec![toast("a", message, ToastOptions::new(), now)];

    assert_eq!(toast_size(&toasts[0]), (TOAST_MAX_WIDTH, 5));

    let output = render_to_string(&toasts, now);

    assert!(output.contains("Could not reach the appointment server,"));
    assert!(output.contains("  please check your connection and retry END"));
    assert_eq!(output.matches('━').count(), 46);
}

#[test]
fn test_wrapped_rows_are_capped() {
    let now = Instant::now();
    let t = toast("a", &"word ".repeat(100), ToastOptions::new().persistent(), now);

    assert_eq!(toast_size(&t), (TOAST_MAX_WIDTH, 8));
}

#[test]
fn test_oversized_message_does_not_overflow_size() {
    let now = Instant::now();
    let t = toast("w", &"x".repeat(65_532), ToastOptions::new(), now);
    let wider = toast("w", &"x".repeat(200_000), ToastOptions::new().title("y".repeat(70_000)), now);

    assert_eq!(toast_size(&t), (TOAST_MAX_WIDTH, 9));
    assert_eq!(toast_size(&wider), (TOAST_MAX_WIDTH, 11));

    let output = render_to_string(&[wider], now);
    assert!(output.contains("yyyy"));
    assert!(output.contains("xxxx"));
}

#[test]
fn test_narrow_area_wraps_to_shrunk_width() {
    let now = Instant::now();
    let area = Rect {
        x: 0,
        y: 0,
        width: 12,
        height: 10,
    };
    let toasts = vec![toast("a", "one two three", ToastOptions::new().persistent(), now)];

    let layout = toast_layout(area, &toasts);

    assert_eq!(layout[0].area.width, 10);
    assert_eq!(layout[0].area.height, 5);
}
