use std::time::Instant;

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::{App, sample_toast, update_toast};
use crate::toast::ToastKind;

impl App {
    /// Route one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key, now);
            }
            Event::Mouse(mouse) => {
                self.presenter.handle_mouse_at(mouse, now);
            }
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('x') => {
                self.presenter.dismiss_at(now);
            }
            KeyCode::Char('u') => self.presenter.present_at(update_toast(), now),
            KeyCode::Char(c) => {
                if let Some(kind) = kind_for_key(c) {
                    self.presenter.present_at(sample_toast(kind), now);
                }
            }
            _ => {}
        }
    }
}

/// Key that shows each toast category
pub fn kind_for_key(c: char) -> Option<ToastKind> {
    match c {
        'd' => Some(ToastKind::Debug),
        'e' => Some(ToastKind::Error),
        'i' => Some(ToastKind::Info),
        'n' => Some(ToastKind::Notice),
        's' => Some(ToastKind::Success),
        'w' => Some(ToastKind::Warning),
        _ => None,
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
