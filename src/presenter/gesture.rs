//! Pointer input on the toast row
//!
//! Any press or drag that lands on the row, in any direction, is a dismiss
//! request. The gesture does not look at drag direction or distance.

use std::time::Instant;

use ratatui::crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::presenter_state::ToastPresenter;

/// True for the mouse events that count as touching the row
pub fn is_dismiss_gesture(kind: MouseEventKind) -> bool {
    matches!(kind, MouseEventKind::Down(_) | MouseEventKind::Drag(_))
}

impl ToastPresenter {
    pub fn handle_mouse(&mut self, event: MouseEvent) -> bool {
        self.handle_mouse_at(event, Instant::now())
    }

    /// Dismiss when `event` is a press or drag on the row as last drawn.
    /// Returns true when the event started the exit sequence.
    pub fn handle_mouse_at(&mut self, event: MouseEvent, now: Instant) -> bool {
        if !is_dismiss_gesture(event.kind) {
            return false;
        }

        let Some(row) = self.row_area() else {
            return false;
        };

        if !row.contains(Position::new(event.column, event.row)) {
            return false;
        }

        log::debug!("Pointer input on toast row at {},{}", event.column, event.row);
        self.dismiss_at(now)
    }
}

#[cfg(test)]
#[path = "gesture_tests.rs"]
mod gesture_tests;
