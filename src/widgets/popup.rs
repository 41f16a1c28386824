use ratatui::{Frame, layout::Rect, widgets::Clear};

use crate::toast::ToastPosition;

/// Place a `width` x `height` box in the corner or edge of `area` named by
/// `position`, `margin` cells in from the border
pub fn anchored_rect(
    area: Rect,
    position: ToastPosition,
    width: u16,
    height: u16,
    margin: u16,
) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = match position {
        ToastPosition::TopLeft | ToastPosition::BottomLeft => {
            area.x + margin.min(area.width - width)
        }
        ToastPosition::TopCenter | ToastPosition::BottomCenter => {
            area.x + (area.width - width) / 2
        }
        ToastPosition::TopRight | ToastPosition::BottomRight => {
            area.x + (area.width - width).saturating_sub(margin)
        }
    };

    let y = if position.is_top() {
        area.y + margin.min(area.height - height)
    } else {
        area.y + (area.height - height).saturating_sub(margin)
    };

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Cells of the close marker drawn in the top border of a toast
pub fn close_button_rect(toast_area: Rect) -> Rect {
    Rect {
        x: toast_area.x + toast_area.width.saturating_sub(4),
        y: toast_area.y,
        width: 3.min(toast_area.width.saturating_sub(2)),
        height: 1.min(toast_area.height),
    }
}

pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
