//! Tests for toast/row

use super::*;
use crate::test_utils::test_helpers::{buffer_contains, buffer_line};
use crate::toast::style::trailing_button;
use proptest::prelude::*;

fn render_row(row: ToastRow<'_>, width: u16) -> Buffer {
    let area = Rect::new(0, 0, width, 3);
    let mut buf = Buffer::empty(area);
    row.render(area, &mut buf);
    buf
}

#[test]
fn test_default_row_layout() {
    let toast = Toast::error("Network Error!");
    let buf = render_row(ToastRow::new(&toast), 30);

    assert!(buffer_line(&buf, 0).starts_with('╭'));
    assert!(buffer_line(&buf, 2).starts_with('╰'));
    assert_eq!(buf[(2, 1)].symbol(), "✖");
    assert!(buffer_line(&buf, 1).contains("Network Error!"));
    assert_eq!(buf[(4, 1)].symbol(), "N");
}

#[test]
fn test_border_and_icon_use_toast_color() {
    let toast = Toast::warning("Careful");
    let buf = render_row(ToastRow::new(&toast), 30);

    assert_eq!(buf[(0, 0)].fg, Color::Yellow);
    assert_eq!(buf[(29, 2)].fg, Color::Yellow);
    assert_eq!(buf[(2, 1)].fg, Color::Yellow);
}

#[test]
fn test_default_fill_is_tinted_toast_color() {
    let toast = Toast::error("boom");
    let buf = render_row(ToastRow::new(&toast), 30);

    assert_eq!(buf[(15, 1)].bg, tinted(Color::Red, BACKGROUND_TINT));
}

#[test]
fn test_background_color_override() {
    let toast = Toast::error("boom");
    let buf = render_row(
        ToastRow::new(&toast).background_color(Some(Color::Black)),
        30,
    );

    assert_eq!(buf[(15, 1)].bg, Color::Black);
}

#[test]
fn test_text_color_defaults_to_terminal_foreground() {
    let toast = Toast::info("hello");
    let buf = render_row(ToastRow::new(&toast), 30);

    assert_eq!(buf[(4, 1)].fg, Color::Reset);
    assert!(buf[(4, 1)].modifier.contains(Modifier::BOLD));
}

#[test]
fn test_text_color_override() {
    let toast = Toast::info("hello");
    let buf = render_row(ToastRow::new(&toast).text_color(Some(Color::White)), 30);

    assert_eq!(buf[(4, 1)].fg, Color::White);
}

#[test]
fn test_trailing_content_is_right_aligned() {
    let toast = Toast::notice("Update ready");
    let trailing = trailing_button("Update", toast.color(), false);
    let buf = render_row(ToastRow::new(&toast).trailing(Content::Custom(trailing)), 30);

    // Content ends at column 28 (border + padding), button is 8 wide
    let line = buffer_line(&buf, 1);
    let button: String = line.chars().skip(20).take(8).collect();
    assert_eq!(button, " Update ");
    assert_eq!(buf[(21, 1)].fg, toast.color());
}

#[test]
fn test_trailing_content_shortens_message() {
    let toast = Toast::notice("A software update is available.");
    let trailing = trailing_button("Update", toast.color(), false);
    let buf = render_row(ToastRow::new(&toast).trailing(Content::Custom(trailing)), 30);

    let line = buffer_line(&buf, 1);
    assert!(line.contains('…'));
    assert!(line.contains(" Update "));
}

#[test]
fn test_custom_message_replaces_text() {
    let toast = Toast::success("ignored");
    let custom = Line::from("Saved 3 files");
    let buf = render_row(ToastRow::new(&toast).message(Content::Custom(custom)), 30);

    assert!(buffer_contains(&buf, "Saved 3 files"));
    assert!(!buffer_contains(&buf, "ignored"));
}

#[test]
fn test_custom_background_is_painted_inside_border() {
    let toast = Toast::debug("trace");
    let paint = |_: &Toast, area: Rect, buf: &mut Buffer| {
        buf.set_style(area, Style::default().bg(Color::Blue));
    };
    let buf = render_row(ToastRow::new(&toast).background(Content::Custom(&paint)), 30);

    assert_eq!(buf[(15, 1)].bg, Color::Blue);
    assert_eq!(buf[(0, 0)].symbol(), "╭");
    assert_eq!(buf[(0, 0)].fg, Color::Magenta);
}

#[test]
fn test_custom_background_ignores_background_color() {
    let toast = Toast::debug("trace");
    let paint = |_: &Toast, area: Rect, buf: &mut Buffer| {
        buf.set_style(area, Style::default().bg(Color::Blue));
    };
    let buf = render_row(
        ToastRow::new(&toast)
            .background_color(Some(Color::Black))
            .background(Content::Custom(&paint)),
        30,
    );

    assert_eq!(buf[(15, 1)].bg, Color::Blue);
}

#[test]
fn test_narrow_row_truncates_message() {
    let toast = Toast::error("Network Error!");
    let buf = render_row(ToastRow::new(&toast), 12);

    let line = buffer_line(&buf, 1);
    assert!(line.contains("Netwo…"), "got {:?}", line);
}

#[test]
fn test_tiny_area_does_not_panic() {
    let toast = Toast::error("Network Error!");
    for width in 0..6 {
        let area = Rect::new(0, 0, width, 3);
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 3));
        ToastRow::new(&toast).render(area, &mut buf);
    }
}

#[test]
fn test_message_resolved_through_bundle() {
    let bundle = std::sync::Arc::new(
        crate::toast::Bundle::new("en").with_message("net.error", "Network Error!"),
    );
    let toast = Toast::error("net.error").with_bundle(bundle);
    let buf = render_row(ToastRow::new(&toast), 30);

    assert!(buffer_contains(&buf, "Network Error!"));
}

#[test]
fn test_truncate_to_width() {
    assert_eq!(truncate_to_width("hello", 10), "hello");
    assert_eq!(truncate_to_width("hello", 5), "hello");
    assert_eq!(truncate_to_width("hello", 4), "hel…");
    assert_eq!(truncate_to_width("hello", 1), "…");
    assert_eq!(truncate_to_width("hello", 0), "");
}

#[test]
fn test_truncate_to_width_wide_chars() {
    // Each CJK character is two columns wide
    assert_eq!(truncate_to_width("日本語", 5), "日本…");
    assert_eq!(truncate_to_width("日本語", 4), "日…");
}

#[test]
fn test_content_helpers() {
    let default: Content<u8> = Content::default();
    assert!(default.is_default());
    assert_eq!(default.as_custom(), None);

    let custom = Content::Custom(3u8);
    assert!(!custom.is_default());
    assert_eq!(custom.as_custom(), Some(&3));
    assert_eq!(custom.map(|v| v * 2).as_custom(), Some(&6));
}

// Truncated text never exceeds the requested width.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_truncate_fits_width(text in "[a-zA-Z日本 ]{0,30}", width in 0usize..40) {
        let truncated = truncate_to_width(&text, width);
        prop_assert!(truncated.width() <= width);
        if text.width() <= width {
            prop_assert_eq!(truncated.as_ref(), text.as_str());
        }
    }
}
