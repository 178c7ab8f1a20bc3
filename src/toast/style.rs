//! Colors and spacing shared by the toast row and its trailing controls

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Border plus one content line
pub const ROW_HEIGHT: u16 = 3;
/// Gap between the row and the screen edges
pub const ROW_MARGIN_X: u16 = 1;
pub const ROW_MARGIN_Y: u16 = 0;
/// Gap between the border and the row content
pub const ROW_PADDING_X: u16 = 1;
/// Gap between icon, message and trailing content
pub const ROW_SPACING: u16 = 1;

/// Opacity of the default row fill
pub const BACKGROUND_TINT: f32 = 0.08;
/// Opacity of the trailing button fill
pub const BUTTON_TINT: f32 = 0.2;

/// Blend `color` over black at `alpha`.
///
/// Named ANSI colors are mapped to their usual xterm values first. Colors
/// without a known RGB value (`Reset`, indexed) come back unchanged.
pub fn tinted(color: Color, alpha: f32) -> Color {
    let Some((r, g, b)) = to_rgb(color) else {
        return color;
    };

    let alpha = alpha.clamp(0.0, 1.0);
    let scale = |channel: u8| (f32::from(channel) * alpha).round() as u8;
    Color::Rgb(scale(r), scale(g), scale(b))
}

fn to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    let rgb = match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black => (0, 0, 0),
        Color::Red => (205, 0, 0),
        Color::Green => (0, 205, 0),
        Color::Yellow => (205, 205, 0),
        Color::Blue => (0, 0, 238),
        Color::Magenta => (205, 0, 205),
        Color::Cyan => (0, 205, 205),
        Color::Gray => (229, 229, 229),
        Color::DarkGray => (127, 127, 127),
        Color::LightRed => (255, 0, 0),
        Color::LightGreen => (0, 255, 0),
        Color::LightYellow => (255, 255, 0),
        Color::LightBlue => (92, 92, 255),
        Color::LightMagenta => (255, 0, 255),
        Color::LightCyan => (0, 255, 255),
        Color::White => (255, 255, 255),
        Color::Reset | Color::Indexed(_) => return None,
    };
    Some(rgb)
}

/// Trailing button in the toast's color, e.g. "Update" or "Undo".
///
/// A pressed button renders dimmed.
pub fn trailing_button(label: impl Into<String>, tint: Color, pressed: bool) -> Line<'static> {
    let mut style = Style::default().fg(tint).bg(tinted(tint, BUTTON_TINT));
    if pressed {
        style = style.add_modifier(Modifier::DIM);
    }

    Line::from(Span::styled(format!(" {} ", label.into()), style))
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod style_tests;
