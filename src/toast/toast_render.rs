//! Toast rendering
//!
//! Toasts are drawn as bordered cards stacked in the corner or edge their
//! position names. Top positions grow downward, bottom positions upward.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::toast_state::Toast;
use super::types::{ToastId, ToastPosition};
use crate::widgets::popup::{anchored_rect, clear_area, close_button_rect, contains};

pub const TOAST_MIN_WIDTH: u16 = 24;
pub const TOAST_MAX_WIDTH: u16 = 48;
const MAX_MESSAGE_LINES: usize = 6;
const MAX_TITLE_LINES: usize = 2;
const EDGE_MARGIN: u16 = 1;
const ICON_WIDTH: u16 = 2;
const CLOSE_MARKER: &str = " x ";

/// Screen area of one rendered toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastArea {
    pub id: ToastId,
    pub area: Rect,
    pub close_button: Option<Rect>,
}

/// Width and height a toast needs, before clamping to the screen
pub fn toast_size(toast: &Toast) -> (u16, u16) {
    toast_size_within(toast, TOAST_MAX_WIDTH)
}

/// Size of a toast no wider than `max_width`, with its text wrapped to fit
fn toast_size_within(toast: &Toast, max_width: u16) -> (u16, u16) {
    let icon = if toast.show_icon() { ICON_WIDTH } else { 0 };
    let title_width = toast.title().map(|t| t.width()).unwrap_or(0);
    let message_width = toast.message().width();

    // Measured in usize so arbitrarily long lines cannot overflow
    let natural = title_width
        .max(message_width)
        .saturating_add(usize::from(icon) + 4);
    let width = natural
        .max(usize::from(TOAST_MIN_WIDTH))
        .min(usize::from(max_width));
    let width = u16::try_from(width).unwrap_or(max_width);

    let content_rows = content_lines(toast, text_width(width, icon)).len();
    let content_rows = u16::try_from(content_rows).unwrap_or(u16::MAX);
    let progress_rows = u16::from(!toast.duration().is_zero() && !toast.is_persistent());

    (width, content_rows.saturating_add(2 + progress_rows))
}

/// Columns left for text inside the borders and after the icon
fn text_width(width: u16, icon: u16) -> usize {
    usize::from(width.saturating_sub(2 + icon).max(1))
}

/// Compute where each open toast goes inside `area`
///
/// Toasts that would overflow their stack are left out.
pub fn toast_layout(area: Rect, toasts: &[Toast]) -> Vec<ToastArea> {
    let mut layout = Vec::new();

    for position in ToastPosition::ALL {
        let mut used: u16 = 0;

        for toast in toasts
            .iter()
            .filter(|t| t.is_open() && t.position() == position)
        {
            let max_width = TOAST_MAX_WIDTH.min(area.width.saturating_sub(EDGE_MARGIN * 2));
            let (width, height) = toast_size_within(toast, max_width);
            let available = area.height.saturating_sub(EDGE_MARGIN * 2 + used);
            if height > available || width == 0 {
                break;
            }

            let slot = anchored_rect(area, position, width, used + height, EDGE_MARGIN);
            let rect = if position.is_top() {
                Rect {
                    y: slot.y + used,
                    height,
                    ..slot
                }
            } else {
                Rect { height, ..slot }
            };
            used += height;

            let close_button = toast.show_close_button().then(|| close_button_rect(rect));
            layout.push(ToastArea {
                id: toast.id().clone(),
                area: rect,
                close_button,
            });
        }
    }

    layout
}

/// Toast under the given screen cell
pub fn toast_at(layout: &[ToastArea], column: u16, row: u16) -> Option<&ToastArea> {
    layout.iter().find(|t| contains(t.area, column, row))
}

/// Toast whose close marker covers the given screen cell
pub fn close_button_at(layout: &[ToastArea], column: u16, row: u16) -> Option<&ToastId> {
    layout
        .iter()
        .find(|t| t.close_button.is_some_and(|r| contains(r, column, row)))
        .map(|t| &t.id)
}

/// Render every open toast into `area`
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &[Toast], now: Instant) -> Vec<ToastArea> {
    let layout = toast_layout(area, toasts);

    for placed in &layout {
        if let Some(toast) = toasts.iter().find(|t| t.id() == &placed.id) {
            render_toast(frame, placed.area, toast, now);
        }
    }

    layout
}

fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast, now: Instant) {
    clear_area(frame, area);

    let color = toast.variant().color();
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color));
    if toast.show_close_button() {
        block = block.title_top(
            Line::from(Span::styled(CLOSE_MARKER, Style::default().fg(Color::DarkGray)))
                .right_aligned(),
        );
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let icon = if toast.show_icon() { ICON_WIDTH } else { 0 };
    let lines = content_lines(toast, text_width(area.width, icon));

    match toast.progress(now) {
        Some(progress) if inner.height > 1 => {
            let content = Rect {
                height: inner.height - 1,
                ..inner
            };
            let bar = Rect {
                y: inner.y + inner.height - 1,
                height: 1,
                ..inner
            };
            frame.render_widget(Paragraph::new(lines), content);
            frame.render_widget(
                Paragraph::new(progress_line(progress, inner.width, color, toast.is_paused())),
                bar,
            );
        }
        _ => frame.render_widget(Paragraph::new(lines), inner),
    }
}

/// Title and message rows, already wrapped to `width` text columns
fn content_lines(toast: &Toast, width: usize) -> Vec<Line<'static>> {
    let color = toast.variant().color();
    let icon = toast
        .show_icon()
        .then(|| Span::styled(format!("{} ", toast.variant().icon()), Style::default().fg(color)));
    let indent = icon.as_ref().map(|_| Span::raw("  "));

    let mut lines = Vec::new();

    if let Some(title) = toast.title() {
        let title = Line::from(Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        for (i, row) in wrap_line(&title, width, MAX_TITLE_LINES).into_iter().enumerate() {
            let prefix = if i == 0 { icon.clone() } else { indent.clone() };
            lines.push(with_prefix(prefix, row));
        }
    }

    let mut message_rows = Vec::new();
    for line in &toast.message().lines {
        let left = MAX_MESSAGE_LINES - message_rows.len();
        if left == 0 {
            break;
        }
        message_rows.extend(wrap_line(line, width, left));
    }
    for (i, row) in message_rows.into_iter().enumerate() {
        let prefix = if i == 0 && toast.title().is_none() {
            icon.clone()
        } else {
            indent.clone()
        };
        lines.push(with_prefix(prefix, row));
    }

    if lines.is_empty() {
        lines.push(Line::from(icon.into_iter().collect::<Vec<_>>()));
    }

    lines
}

fn with_prefix(prefix: Option<Span<'static>>, row: Line<'static>) -> Line<'static> {
    let style = row.style;
    let mut spans: Vec<Span<'static>> = prefix.into_iter().collect();
    spans.extend(row.spans);
    Line::from(spans).style(style)
}

/// Word-wrap a styled line into at most `max_rows` rows of `width` columns
///
/// Words longer than a row are split. Span styles carry over to the rows
/// they end up on.
fn wrap_line(line: &Line<'static>, width: usize, max_rows: usize) -> Vec<Line<'static>> {
    let cells: Vec<(char, Style)> = line
        .spans
        .iter()
        .flat_map(|span| span.content.chars().map(move |c| (c, span.style)))
        .collect();

    let mut rows = Vec::new();
    let mut start = 0;

    while start < cells.len() && rows.len() < max_rows {
        if !rows.is_empty() && cells[start].0 == ' ' {
            start += 1;
            continue;
        }

        let mut end = start;
        let mut used = 0;
        let mut break_after = None;
        while end < cells.len() {
            let w = cells[end].0.width().unwrap_or(0);
            if used + w > width && end > start {
                break;
            }
            if cells[end].0 == ' ' {
                break_after = Some(end + 1);
            }
            used += w;
            end += 1;
        }
        if end < cells.len() && cells[end].0 != ' ' {
            if let Some(at) = break_after {
                end = at;
            }
        }

        rows.push(styled_row(&cells[start..end], line.style));
        start = end;
    }

    if rows.is_empty() {
        rows.push(Line::default().style(line.style));
    }
    rows
}

fn styled_row(cells: &[(char, Style)], style: Style) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    for &(c, cell_style) in cells {
        match spans.last_mut() {
            Some(span) if span.style == cell_style => span.content.to_mut().push(c),
            _ => spans.push(Span::styled(c.to_string(), cell_style)),
        }
    }
    Line::from(spans).style(style)
}

fn progress_line(progress: f64, width: u16, color: Color, paused: bool) -> Line<'static> {
    let filled = (progress * f64::from(width)).round() as usize;
    let empty = (width as usize).saturating_sub(filled);
    let bar_color = if paused { Color::DarkGray } else { color };

    Line::from(vec![
        Span::styled("━".repeat(filled), Style::default().fg(bar_color)),
        Span::styled("─".repeat(empty), Style::default().fg(Color::DarkGray)),
    ])
}

#[cfg(test)]
#[path = "toast_render_tests.rs"]
mod toast_render_tests;
