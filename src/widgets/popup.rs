use ratatui::layout::Rect;

use crate::toast::ToastEdge;

/// Rect of `height` rows pinned to `edge` of `area`, after the margins
pub fn anchored_rect(area: Rect, edge: ToastEdge, height: u16, margin_x: u16, margin_y: u16) -> Rect {
    let inner = inset_rect(area, margin_x, margin_y);
    let height = height.min(inner.height);

    let y = match edge {
        ToastEdge::Top => inner.y,
        ToastEdge::Bottom => inner.bottom().saturating_sub(height),
    };

    Rect {
        x: inner.x,
        y,
        width: inner.width,
        height,
    }
}

/// The part of `rect`, moved down by `dy` rows, that still lies inside `bounds`
pub fn shifted_visible(rect: Rect, dy: i32, bounds: Rect) -> Option<Rect> {
    let top = i32::from(rect.y) + dy;
    let bottom = top + i32::from(rect.height);

    let visible_top = top.max(i32::from(bounds.y));
    let visible_bottom = bottom.min(i32::from(bounds.bottom()));

    if visible_top >= visible_bottom || rect.width == 0 {
        return None;
    }

    Some(Rect {
        x: rect.x,
        y: visible_top as u16,
        width: rect.width,
        height: (visible_bottom - visible_top) as u16,
    })
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
