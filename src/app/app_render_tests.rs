//! Tests for app/app_render

use super::*;
use crate::app::UPDATE_MESSAGE;
use crate::config::Config;
use crate::test_utils::test_helpers::{buffer_contains, buffer_line, ms, start};
use crate::toast::Toast;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn render_app(app: &mut App, now: Instant, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.render(f, now)).unwrap();
    terminal
}

#[test]
fn test_idle_screen_shows_key_help() {
    let mut app = App::new(&Config::default());
    let terminal = render_app(&mut app, start(), 60, 20);
    let buf = terminal.backend().buffer();

    assert!(buffer_contains(buf, " toast demo "));
    assert!(buffer_contains(buf, "update available"));
    assert!(buffer_contains(buf, "Dismissed: 0"));
}

#[test]
fn test_toast_drawn_over_screen() {
    let t0 = start();
    let mut app = App::new(&Config::default());
    app.presenter.present_at(Toast::error("Network Error!"), t0);
    app.presenter.tick_at(t0 + ms(1300));

    let terminal = render_app(&mut app, t0 + ms(1300), 60, 20);
    let buf = terminal.backend().buffer();

    assert!(buffer_line(buf, 1).contains("Network Error!"));
    assert!(!buffer_contains(buf, " toast demo "));
}

#[test]
fn test_update_toast_has_trailing_button() {
    let t0 = start();
    let mut app = App::new(&Config::default());
    app.presenter.present_at(Toast::notice(UPDATE_MESSAGE), t0);
    app.presenter.tick_at(t0 + ms(1300));

    let terminal = render_app(&mut app, t0 + ms(1300), 60, 20);
    let line = buffer_line(terminal.backend().buffer(), 1);

    assert!(line.contains(UPDATE_MESSAGE));
    assert!(line.contains(" Update "));
}

#[test]
fn test_other_toasts_have_no_trailing_button() {
    let t0 = start();
    let mut app = App::new(&Config::default());
    app.presenter.present_at(Toast::success("Saved"), t0);
    app.presenter.tick_at(t0 + ms(1300));

    let terminal = render_app(&mut app, t0 + ms(1300), 60, 20);

    assert!(!buffer_contains(terminal.backend().buffer(), "Update"));
}

#[test]
fn test_dismissed_counter_rendered() {
    let t0 = start();
    let mut app = App::new(&Config::default());
    app.presenter.present_at(Toast::info("one"), t0);
    app.presenter.tick_at(t0 + ms(3800));

    let terminal = render_app(&mut app, t0 + ms(3800), 60, 20);

    assert!(buffer_contains(terminal.backend().buffer(), "Dismissed: 1"));
}
