//! Row widget that draws a single toast
//!
//! Layout, left to right: icon, message (or custom message line), flexible
//! gap, trailing content. The whole row sits inside a rounded border stroked
//! in the toast's color.

use std::borrow::Cow;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::model::Toast;
use super::style::{BACKGROUND_TINT, ROW_PADDING_X, ROW_SPACING, tinted};
use crate::widgets::popup;

/// Custom background painter: receives the toast and the full row area
pub type Background = dyn Fn(&Toast, Rect, &mut Buffer);

/// Either the built-in rendering or caller-supplied content
#[derive(Debug, Clone)]
pub enum Content<T> {
    Default,
    Custom(T),
}

impl<T> Default for Content<T> {
    fn default() -> Self {
        Content::Default
    }
}

impl<T> Content<T> {
    pub fn is_default(&self) -> bool {
        matches!(self, Content::Default)
    }

    pub fn as_custom(&self) -> Option<&T> {
        match self {
            Content::Custom(value) => Some(value),
            Content::Default => None,
        }
    }

    pub fn map<'a, U>(&'a self, f: impl FnOnce(&'a T) -> U) -> Content<U> {
        match self {
            Content::Custom(value) => Content::Custom(f(value)),
            Content::Default => Content::Default,
        }
    }
}

/// Stateless rendering of a [`Toast`]
pub struct ToastRow<'a> {
    toast: &'a Toast,
    background_color: Option<Color>,
    text_color: Option<Color>,
    trailing: Content<Line<'a>>,
    message: Content<Line<'a>>,
    background: Content<&'a Background>,
}

impl<'a> ToastRow<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self {
            toast,
            background_color: None,
            text_color: None,
            trailing: Content::Default,
            message: Content::Default,
            background: Content::Default,
        }
    }

    /// Fill used by the default background instead of the tinted toast color
    pub fn background_color(mut self, color: Option<Color>) -> Self {
        self.background_color = color;
        self
    }

    /// Message color instead of the terminal foreground
    pub fn text_color(mut self, color: Option<Color>) -> Self {
        self.text_color = color;
        self
    }

    pub fn trailing(mut self, trailing: Content<Line<'a>>) -> Self {
        self.trailing = trailing;
        self
    }

    pub fn message(mut self, message: Content<Line<'a>>) -> Self {
        self.message = message;
        self
    }

    pub fn background(mut self, background: Content<&'a Background>) -> Self {
        self.background = background;
        self
    }
}

impl Widget for ToastRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        Clear.render(area, buf);

        let toast = self.toast;
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(toast.color()));

        match self.background {
            Content::Default => {
                let fill = self
                    .background_color
                    .unwrap_or_else(|| tinted(toast.color(), BACKGROUND_TINT));
                block = block.style(Style::default().bg(fill));
            }
            Content::Custom(paint) => paint(toast, area, buf),
        }

        let inner = block.inner(area);
        block.render(area, buf);

        let content = popup::inset_rect(inner, ROW_PADDING_X, 0);
        if content.is_empty() {
            return;
        }

        let y = content.y + content.height.saturating_sub(1) / 2;
        let right = content.right();
        let mut x = content.x;

        let icon = toast.icon();
        let icon_width = icon.width().min(content.width);
        if icon_width > 0 {
            let icon_span = Span::styled(
                icon.glyph(),
                Style::default()
                    .fg(toast.color())
                    .add_modifier(Modifier::BOLD),
            );
            buf.set_span(x, y, &icon_span, icon_width);
            x = (x + icon_width + ROW_SPACING).min(right);
        }

        let mut message_right = right;
        if let Content::Custom(line) = &self.trailing {
            let width = (line.width() as u16).min(right - x);
            if width > 0 {
                let trailing_x = right - width;
                buf.set_line(trailing_x, y, line, width);
                message_right = trailing_x.saturating_sub(ROW_SPACING).max(x);
            }
        }

        let message_width = message_right - x;
        if message_width == 0 {
            return;
        }

        match &self.message {
            Content::Custom(line) => {
                buf.set_line(x, y, line, message_width);
            }
            Content::Default => {
                let mut style = Style::default().add_modifier(Modifier::BOLD);
                if let Some(color) = self.text_color {
                    style = style.fg(color);
                }
                let text = truncate_to_width(toast.resolved_message(), message_width as usize);
                buf.set_stringn(x, y, text, message_width as usize, style);
            }
        }
    }
}

/// Cut `text` to `width` columns, ending with an ellipsis when shortened
pub fn truncate_to_width(text: &str, width: usize) -> Cow<'_, str> {
    if text.width() <= width {
        return Cow::Borrowed(text);
    }
    if width == 0 {
        return Cow::Borrowed("");
    }

    let budget = width - 1;
    let mut used = 0;
    let mut truncated = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        truncated.push(ch);
    }
    truncated.push('…');
    Cow::Owned(truncated)
}

#[cfg(test)]
#[path = "row_tests.rs"]
mod row_tests;
