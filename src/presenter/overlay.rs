//! Drawing the toast over a host screen
//!
//! The row is drawn into a scratch buffer at its resting place, then copied
//! into the frame shifted by the current animation offset. Rows pushed past
//! the host area are clipped.

use std::time::Instant;

use ratatui::{Frame, buffer::Buffer, layout::Rect, widgets::Widget};

use super::presenter_state::ToastPresenter;
use crate::toast::style::{ROW_HEIGHT, ROW_MARGIN_X, ROW_MARGIN_Y};
use crate::toast::ToastRow;
use crate::widgets::popup;

impl ToastPresenter {
    /// Draw the toast (if any) over `area` as it looks at `now`
    pub fn render_at(&mut self, area: Rect, buf: &mut Buffer, now: Instant) {
        self.row_area = None;

        let Some(toast) = self.toast() else {
            return;
        };

        let anchor = popup::anchored_rect(area, self.edge(), ROW_HEIGHT, ROW_MARGIN_X, ROW_MARGIN_Y);
        let dy = self.offset_at(now).round() as i32;
        let Some(visible) = popup::shifted_visible(anchor, dy, area) else {
            return;
        };

        let options = &self.options;
        let trailing = options.trailing.map(|factory| factory(toast));
        let message = options.message.map(|factory| factory(toast));
        let background = options.background.map(|paint| &**paint);

        let scratch_area = Rect {
            y: 0,
            ..anchor
        };
        let mut scratch = Buffer::empty(scratch_area);
        ToastRow::new(toast)
            .background_color(options.background_color)
            .text_color(options.text_color)
            .trailing(trailing)
            .message(message)
            .background(background)
            .render(scratch_area, &mut scratch);

        let shifted_top = i32::from(anchor.y) + dy;
        for y in visible.top()..visible.bottom() {
            let source_y = (i32::from(y) - shifted_top) as u16;
            for x in visible.left()..visible.right() {
                if let (Some(source), Some(target)) =
                    (scratch.cell((x, source_y)), buf.cell_mut((x, y)))
                {
                    *target = source.clone();
                }
            }
        }

        self.row_area = Some(visible);
    }
}

/// A widget with the toast overlay drawn on top of it
pub struct Toasted<'a, W> {
    inner: W,
    presenter: &'a mut ToastPresenter,
    now: Instant,
}

impl<W: Widget> Widget for Toasted<'_, W> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.inner.render(area, buf);
        self.presenter.render_at(area, buf, self.now);
    }
}

/// Attach a toast presenter to any widget
pub trait ToastExt: Widget + Sized {
    fn with_toast(self, presenter: &mut ToastPresenter) -> Toasted<'_, Self> {
        self.with_toast_at(presenter, Instant::now())
    }

    fn with_toast_at(self, presenter: &mut ToastPresenter, now: Instant) -> Toasted<'_, Self> {
        Toasted {
            inner: self,
            presenter,
            now,
        }
    }
}

impl<W: Widget> ToastExt for W {}

/// Draw the toast over the whole frame
pub fn render_toast(frame: &mut Frame, presenter: &mut ToastPresenter) {
    let area = frame.area();
    presenter.render_at(area, frame.buffer_mut(), Instant::now());
}

#[cfg(test)]
#[path = "overlay_tests.rs"]
mod overlay_tests;
